//! DOM Helpers
//!
//! Lookups and event binding against the server-rendered form.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, HtmlInputElement};

/// Element ids and selectors the hosting page provides
pub mod ids {
    pub const CART_HOST: &str = "recursos-app";
    pub const CATALOG_DATA: &str = "data-catalogo";
    pub const INITIAL_CART_DATA: &str = "data-recursos";
    pub const DATE: &str = "id_fecha";
    pub const START_TIME: &str = "id_hora_inicio";
    pub const END_TIME: &str = "id_hora_fin";
    pub const TIME_ERROR_HOST: &str = "time-error";
    pub const ATTACHMENT: &str = "id_archivo_adjunto";
    pub const CALENDAR_MODAL: &str = "calendarModal";
    pub const CALENDAR: &str = "calendar";
    pub const SPACE_SELECT: &str = "id_espacio";
    pub const SPACE_CARDS: &str = ".space-card[data-espacio-id]";
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Current value of an `<input>` by id (empty when missing)
pub fn input_value(id: &str) -> String {
    element_by_id::<HtmlInputElement>(id)
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Text of an embedded `<script type="application/json">` payload
pub fn embedded_text(id: &str) -> Option<String> {
    element_by_id::<web_sys::Element>(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Best-effort text for a thrown JS value
pub fn js_error_text(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", err)
}
