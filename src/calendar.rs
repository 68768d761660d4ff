//! Booking Calendar
//!
//! Read-only FullCalendar week view of existing bookings, living inside a
//! Bootstrap modal. The widget needs a layout pass to size itself, so it is
//! rendered on the first `shown.bs.modal` and resized on every show.

use std::cell::Cell;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::PageConfig;
use crate::dom::{self, ids};
use crate::notify::{self, Icon, Notice};

#[wasm_bindgen(js_namespace = FullCalendar)]
extern "C" {
    type Calendar;

    #[wasm_bindgen(constructor, catch)]
    fn new(container: &HtmlElement, options: &JsValue) -> Result<Calendar, JsValue>;

    #[wasm_bindgen(method)]
    fn render(this: &Calendar);

    #[wasm_bindgen(method, js_name = updateSize)]
    fn update_size(this: &Calendar);
}

#[wasm_bindgen]
extern "C" {
    type EventClickArg;

    #[wasm_bindgen(method, getter)]
    fn event(this: &EventClickArg) -> EventApi;

    type EventApi;

    #[wasm_bindgen(method, getter)]
    fn title(this: &EventApi) -> String;

    #[wasm_bindgen(method, getter)]
    fn start(this: &EventApi) -> Option<js_sys::Date>;

    #[wasm_bindgen(method, getter)]
    fn end(this: &EventApi) -> Option<js_sys::Date>;
}

// ========================
// Widget Options
// ========================

#[derive(Serialize)]
struct HeaderToolbar {
    left: &'static str,
    center: &'static str,
    right: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BusinessHours<'a> {
    days_of_week: &'a [u32],
    start_time: &'a str,
    end_time: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalendarOptions<'a> {
    initial_view: &'a str,
    locale: &'a str,
    header_toolbar: HeaderToolbar,
    business_hours: BusinessHours<'a>,
    slot_min_time: &'a str,
    slot_max_time: &'a str,
    height: &'static str,
    events: &'a str,
}

impl<'a> CalendarOptions<'a> {
    fn from_config(config: &'a PageConfig) -> Self {
        let settings = &config.calendar;
        Self {
            initial_view: &settings.initial_view,
            locale: &settings.locale,
            header_toolbar: HeaderToolbar {
                left: "prev,next today",
                center: "title",
                right: "dayGridMonth,timeGridWeek",
            },
            business_hours: BusinessHours {
                days_of_week: &settings.business_days,
                start_time: &settings.business_start,
                end_time: &settings.business_end,
            },
            slot_min_time: &settings.slot_min_time,
            slot_max_time: &settings.slot_max_time,
            height: "auto",
            events: &config.calendar_url,
        }
    }
}

/// Notice text for a clicked block: `title | HH:MM - HH:MM`
fn describe_block(title: &str, start: Option<(u32, u32)>, end: Option<(u32, u32)>) -> String {
    let clock = |(h, m): (u32, u32)| format!("{:02}:{:02}", h, m);
    match (start, end) {
        (Some(start), Some(end)) => format!("{} | {} - {}", title, clock(start), clock(end)),
        (Some(start), None) => format!("{} | {}", title, clock(start)),
        _ => title.to_string(),
    }
}

fn hour_minute(date: &js_sys::Date) -> (u32, u32) {
    (date.get_hours(), date.get_minutes())
}

fn build_options(config: &PageConfig) -> Result<JsValue, JsValue> {
    let options = serde_wasm_bindgen::to_value(&CalendarOptions::from_config(config))?;

    let on_event_click = Closure::<dyn FnMut(EventClickArg)>::new(|info: EventClickArg| {
        let event = info.event();
        let text = describe_block(
            &event.title(),
            event.start().as_ref().map(hour_minute),
            event.end().as_ref().map(hour_minute),
        );
        notify::show(&Notice::blocking("Ocupado", text, Icon::Warning));
    });
    js_sys::Reflect::set(&options, &"eventClick".into(), on_event_click.as_ref())?;
    on_event_click.forget();

    let on_feed_failure = Closure::<dyn FnMut(JsValue)>::new(|err: JsValue| {
        web_sys::console::error_1(
            &format!("[CALENDAR] Error cargando eventos: {}", dom::js_error_text(&err)).into(),
        );
        notify::show(&Notice::toast(
            "Calendario",
            "No se pudieron cargar las reservas existentes.",
            Icon::Error,
        ));
    });
    js_sys::Reflect::set(&options, &"eventSourceFailure".into(), on_feed_failure.as_ref())?;
    on_feed_failure.forget();

    Ok(options)
}

/// Construct the calendar and defer rendering until its dialog is shown.
/// Missing pieces only disable the calendar, never the rest of the form.
pub fn mount_calendar(config: &PageConfig) {
    let Some(container) = dom::element_by_id::<HtmlElement>(ids::CALENDAR) else {
        web_sys::console::warn_1(&"[CALENDAR] No se encontró #calendar".into());
        return;
    };

    let calendar = match build_options(config).and_then(|options| Calendar::new(&container, &options)) {
        Ok(calendar) => calendar,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[CALENDAR] FullCalendar no cargó: {}", dom::js_error_text(&err)).into(),
            );
            return;
        }
    };

    let Some(modal) = dom::element_by_id::<web_sys::Element>(ids::CALENDAR_MODAL) else {
        // Not inside a dialog: already visible
        calendar.render();
        return;
    };

    let rendered = Cell::new(false);
    let bound = dom::listen(&modal, "shown.bs.modal", move |_| {
        if !rendered.replace(true) {
            calendar.render();
        }
        calendar.update_size();
    });
    if let Err(err) = bound {
        web_sys::console::error_1(
            &format!("[CALENDAR] No se pudo enlazar el modal: {}", dom::js_error_text(&err)).into(),
        );
    }
}
