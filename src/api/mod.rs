//! Backend HTTP Bindings
//!
//! Browser `fetch` wrappers for the reservation endpoints.

mod stock;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use stock::check_availability;

/// Status and raw body of a completed request
pub(crate) struct Reply {
    pub status: u16,
    pub body: Option<String>,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// GET marked as an AJAX request. Only transport failures are errors; any
/// HTTP status is returned to the caller.
pub(crate) async fn get(url: &str) -> Result<Reply, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init)?;
    let headers = request.headers();
    headers.set("X-Requested-With", "XMLHttpRequest")?;
    headers.set("Accept", "application/json")?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let body = match response.text() {
        Ok(promise) => JsFuture::from(promise).await.ok().and_then(|text| text.as_string()),
        Err(_) => None,
    };

    Ok(Reply {
        status: response.status(),
        body,
    })
}
