//! Page Configuration
//!
//! Endpoints and widget settings handed over by the server template.

use reserva_cart::{AttachmentLimits, OperatingWindow};
use serde::{Deserialize, Deserializer};
use wasm_bindgen::JsValue;

const DEFAULT_CALENDAR_URL: &str = "/reservas/api/reservas-calendario/";
const DEFAULT_STOCK_URL: &str = "/reservas/api/consultar-stock/";

/// Calendar look: business hours are cosmetic only
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    pub locale: String,
    pub initial_view: String,
    /// 0 = Sunday
    pub business_days: Vec<u32>,
    pub business_start: String,
    pub business_end: String,
    pub slot_min_time: String,
    pub slot_max_time: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            locale: "es".to_string(),
            initial_view: "timeGridWeek".to_string(),
            business_days: vec![1, 2, 3, 4, 5],
            business_start: "08:00".to_string(),
            business_end: "22:00".to_string(),
            slot_min_time: "08:00:00".to_string(),
            slot_max_time: "22:00:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub calendar_url: String,
    pub stock_url: String,
    #[serde(deserialize_with = "loose_id")]
    pub reserva_id: Option<String>,
    pub calendar: CalendarSettings,
    /// Opt-in client check of the server's opening hours and minimum length
    pub operating_window: Option<OperatingWindow>,
    pub attachment: AttachmentLimits,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            calendar_url: DEFAULT_CALENDAR_URL.to_string(),
            stock_url: DEFAULT_STOCK_URL.to_string(),
            reserva_id: None,
            calendar: CalendarSettings::default(),
            operating_window: None,
            attachment: AttachmentLimits::default(),
        }
    }
}

/// Reservation ids come as strings or numbers; empty and zero mean "none"
fn loose_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) => normalize_id(text),
        Some(Raw::Number(n)) if n != 0 => Some(n.to_string()),
        _ => None,
    })
}

fn normalize_id(text: String) -> Option<String> {
    let text = text.trim();
    (!text.is_empty() && text != "0").then(|| text.to_string())
}

impl PageConfig {
    /// Read `window.RESERVAS_CONFIG`, then let the legacy globals
    /// (`API_CALENDARIO`, `API_STOCK`, `RESERVA_ID`) override it.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let mut config = match js_sys::Reflect::get(&window, &JsValue::from_str("RESERVAS_CONFIG")) {
            Ok(value) if value.is_object() => {
                serde_wasm_bindgen::from_value(value).unwrap_or_else(|err| {
                    web_sys::console::warn_1(
                        &format!("[BOOT] RESERVAS_CONFIG ignorado: {}", err).into(),
                    );
                    Self::default()
                })
            }
            _ => Self::default(),
        };

        if let Some(url) = global_text(&window, "API_CALENDARIO") {
            config.calendar_url = url;
        }
        if let Some(url) = global_text(&window, "API_STOCK") {
            config.stock_url = url;
        }
        if let Some(id) = global_text(&window, "RESERVA_ID").and_then(normalize_id) {
            config.reserva_id = Some(id);
        }
        config
    }
}

fn global_text(window: &web_sys::Window, name: &str) -> Option<String> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(name)).ok()?;
    if let Some(text) = value.as_string() {
        return Some(text).filter(|t| !t.is_empty());
    }
    value
        .as_f64()
        .filter(|n| n.fract() == 0.0)
        .map(|n| format!("{}", n as i64))
}
