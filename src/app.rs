//! Reservation Form App
//!
//! Boots the form controller: reads page configuration and embedded data,
//! mounts the Leptos components into their host elements and binds the
//! plain-DOM validators.

use leptos::prelude::*;
use reactive_stores::Store;
use reserva_cart::{Cart, TimeRangeIssue};
use web_sys::HtmlElement;

use crate::calendar;
use crate::components::{ResourceCart, TimeRangeNotice};
use crate::config::PageConfig;
use crate::dom::{self, ids};
use crate::models::ResourceOption;
use crate::space_picker;
use crate::store::{CartState, CartStore};
use crate::validators;

/// Edit mode seeds the cart from the server snapshot; stock is not re-checked
fn load_initial_cart() -> Cart {
    let Some(payload) = dom::embedded_text(ids::INITIAL_CART_DATA) else {
        return Cart::new();
    };
    match Cart::from_json(&payload) {
        Ok(cart) => {
            web_sys::console::log_1(&format!("[BOOT] {} recursos precargados", cart.len()).into());
            cart
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[BOOT] Error leyendo data-recursos: {}", err).into());
            Cart::new()
        }
    }
}

fn load_catalog() -> Vec<ResourceOption> {
    let Some(payload) = dom::embedded_text(ids::CATALOG_DATA) else {
        web_sys::console::warn_1(&"[BOOT] Sin catálogo de recursos".into());
        return Vec::new();
    };
    serde_json::from_str(&payload).unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("[BOOT] Error leyendo data-catalogo: {}", err).into());
        Vec::new()
    })
}

/// Mount a view into a host element for the lifetime of the page
fn mount_at<F, N>(host_id: &str, view: F) -> bool
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    match dom::element_by_id::<HtmlElement>(host_id) {
        Some(host) => {
            leptos::mount::mount_to(host, view).forget();
            true
        }
        None => {
            web_sys::console::warn_1(&format!("[BOOT] No se encontró #{}", host_id).into());
            false
        }
    }
}

pub fn boot() {
    web_sys::console::log_1(&"[BOOT] Reservas: WASM cargado".into());
    let config = PageConfig::load();

    // Page-lifetime cart, handed to each consumer
    let cart: CartStore = Store::new(CartState::new(load_initial_cart()));
    let catalog = load_catalog();
    let stock_url = config.stock_url.clone();
    let reserva_id = config.reserva_id.clone();
    mount_at(ids::CART_HOST, move || {
        view! {
            <ResourceCart cart=cart catalog=catalog stock_url=stock_url reserva_id=reserva_id />
        }
    });

    let (time_issue, set_time_issue) = signal::<Option<TimeRangeIssue>>(None);
    mount_at(ids::TIME_ERROR_HOST, move || view! { <TimeRangeNotice issue=time_issue /> });
    validators::bind_time_range(config.operating_window, set_time_issue);

    validators::bind_attachment(config.attachment.clone());
    space_picker::bind_space_cards();
    calendar::mount_calendar(&config);
}
