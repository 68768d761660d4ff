//! Space Picker
//!
//! Clickable space cards driving the (visually hidden) space select.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlSelectElement};

use crate::dom::{self, ids};

const SELECTED: &str = "selected";

pub fn bind_space_cards() {
    let Some(select) = dom::element_by_id::<HtmlSelectElement>(ids::SPACE_SELECT) else {
        return;
    };
    let _ = select.class_list().add_1("visually-hidden-select");

    let cards = space_cards();
    let current = select.value();

    for card in cards {
        let Some(espacio_id) = card.get_attribute("data-espacio-id") else {
            continue;
        };
        if !current.is_empty() && current == espacio_id {
            let _ = card.class_list().add_1(SELECTED);
        }

        let select = select.clone();
        let clicked = card.clone();
        let bound = dom::listen(&card, "click", move |_| {
            select_space(&select, &clicked, &espacio_id);
        });
        if let Err(err) = bound {
            web_sys::console::error_1(&format!("[SPACE] {}", dom::js_error_text(&err)).into());
        }
    }
}

fn space_cards() -> Vec<Element> {
    let Some(list) = dom::document().and_then(|doc| doc.query_selector_all(ids::SPACE_CARDS).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn select_space(select: &HtmlSelectElement, card: &Element, espacio_id: &str) {
    select.set_value(espacio_id);
    if let Ok(change) = Event::new("change") {
        let _ = select.dispatch_event(&change);
    }

    for other in space_cards() {
        let _ = other.class_list().remove_1(SELECTED);
    }
    let _ = card.class_list().add_1(SELECTED);
}
