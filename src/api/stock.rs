//! Stock Lookup
//!
//! Real-time availability for one resource over a date and time range.

use reserva_cart::{StockError, StockQuery, StockResponse};

use super::{get, Reply};
use crate::dom::js_error_text;

/// One round trip, no retry and no caching. Reconciling the answer against
/// the cart is up to the caller.
pub async fn check_availability(stock_url: &str, query: &StockQuery) -> Result<u32, StockError> {
    let url = query.url(stock_url);
    web_sys::console::log_1(&format!("[STOCK] GET {}", url).into());

    let reply = get(&url)
        .await
        .map_err(|err| StockError::Transport(js_error_text(&err)))?;
    let available = decode(reply)?;

    web_sys::console::log_1(
        &format!("[STOCK] recurso {} disponible: {}", query.resource_id, available).into(),
    );
    Ok(available)
}

fn decode(reply: Reply) -> Result<u32, StockError> {
    let body = reply.body.as_deref().unwrap_or_default();
    match serde_json::from_str::<StockResponse>(body) {
        Ok(response) => response.into_available(reply.status),
        Err(_) if !reply.is_success() => Err(StockError::Status(reply.status)),
        Err(err) => Err(StockError::Malformed(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> Reply {
        Reply {
            status,
            body: Some(body.to_string()),
        }
    }

    #[test]
    fn test_decode_available() {
        assert_eq!(decode(reply(200, r#"{"stock_real": 4}"#)), Ok(4));
    }

    #[test]
    fn test_decode_error_body_with_status() {
        assert_eq!(
            decode(reply(400, r#"{"error": "Faltan datos"}"#)),
            Err(StockError::Backend("Faltan datos".to_string()))
        );
    }

    #[test]
    fn test_decode_html_error_page() {
        assert_eq!(decode(reply(500, "<html>boom</html>")), Err(StockError::Status(500)));
    }

    #[test]
    fn test_decode_garbage_with_ok_status() {
        assert!(matches!(decode(reply(200, "nope")), Err(StockError::Malformed(_))));
        let empty = Reply { status: 200, body: None };
        assert!(matches!(decode(empty), Err(StockError::Malformed(_))));
    }
}
