//! User Notifications
//!
//! SweetAlert2 (`Swal.fire`) wrapper with a `window.alert` fallback when the
//! library is not loaded.

use reserva_cart::{AttachmentError, InputError, StockError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Swal, js_name = fire, catch)]
    fn swal_fire(options: &JsValue) -> Result<JsValue, JsValue>;
}

const CONFIRM_COLOR: &str = "#D71920";
const TOAST_MILLIS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_button_color: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub toast: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_confirm_button: Option<bool>,
}

impl Notice {
    /// Modal notice the user must dismiss
    pub fn blocking(title: impl Into<String>, text: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            icon,
            confirm_button_color: Some(CONFIRM_COLOR),
            toast: false,
            position: None,
            timer: None,
            show_confirm_button: None,
        }
    }

    /// Corner toast that dismisses itself
    pub fn toast(title: impl Into<String>, text: impl Into<String>, icon: Icon) -> Self {
        Self {
            confirm_button_color: None,
            toast: true,
            position: Some("top-end"),
            timer: Some(TOAST_MILLIS),
            show_confirm_button: Some(false),
            ..Self::blocking(title, text, icon)
        }
    }
}

pub fn show(notice: &Notice) {
    let fired = serde_wasm_bindgen::to_value(notice)
        .map_err(JsValue::from)
        .and_then(|options| swal_fire(&options));
    if fired.is_err() {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("{}\n{}", notice.title, notice.text));
        }
    }
}

// ========================
// Notices by error kind
// ========================

pub fn input_error(err: &InputError) {
    let icon = match err {
        InputError::MissingSchedule => Icon::Info,
        _ => Icon::Warning,
    };
    show(&Notice::blocking(err.title(), err.to_string(), icon));
}

pub fn stock_error(err: &StockError) {
    show(&Notice::blocking("Error", err.to_string(), Icon::Error));
}

pub fn attachment_error(err: &AttachmentError) {
    show(&Notice::blocking(err.title(), err.to_string(), Icon::Error));
}
