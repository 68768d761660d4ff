//! Form Field Validators
//!
//! Time-range check on the clock inputs and integrity read on the
//! attachment input. Both are bound once at boot.

use leptos::prelude::*;
use reserva_cart::{
    check_time_range, precheck_attachment, AttachmentError, AttachmentLimits, OperatingWindow,
    TimeRangeIssue,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, HtmlInputElement};

use crate::dom::{self, ids};
use crate::notify;

/// Re-check the range whenever either clock input changes
pub fn bind_time_range(operating_window: Option<OperatingWindow>, set_issue: WriteSignal<Option<TimeRangeIssue>>) {
    let (Some(start), Some(end)) = (
        dom::element_by_id::<HtmlInputElement>(ids::START_TIME),
        dom::element_by_id::<HtmlInputElement>(ids::END_TIME),
    ) else {
        web_sys::console::warn_1(&"[FORM] Campos de hora no encontrados".into());
        return;
    };

    let evaluate = {
        let (start, end) = (start.clone(), end.clone());
        move || set_issue.set(check_time_range(&start.value(), &end.value(), operating_window.as_ref()))
    };
    // Pre-filled values (edit mode, redisplay after a server error)
    evaluate();

    for input in [&start, &end] {
        let evaluate = evaluate.clone();
        if let Err(err) = dom::listen(input, "change", move |_| evaluate()) {
            web_sys::console::error_1(&format!("[FORM] {}", dom::js_error_text(&err)).into());
        }
    }
}

/// Reject empty, oversized, disallowed or unreadable attachments
pub fn bind_attachment(limits: AttachmentLimits) {
    let Some(input) = dom::element_by_id::<HtmlInputElement>(ids::ATTACHMENT) else {
        return;
    };

    let target = input.clone();
    let bound = dom::listen(&input, "change", move |_| {
        let Some(file) = selected_file(&target) else {
            return;
        };
        let name = file.name();

        if let Err(err) = precheck_attachment(&name, file.size() as u64, &limits) {
            reject(&target, &err);
            return;
        }

        let target = target.clone();
        spawn_local(async move {
            if let Err(err) = read_first_byte(&file).await {
                web_sys::console::warn_1(
                    &format!("[ATTACHMENT] {} ilegible: {}", name, dom::js_error_text(&err)).into(),
                );
                // A newer selection owns the input now
                if selected_file(&target).map(|f| f.name()) == Some(name.clone()) {
                    reject(&target, &AttachmentError::Unreadable(name));
                }
            }
        });
    });
    if let Err(err) = bound {
        web_sys::console::error_1(&format!("[ATTACHMENT] {}", dom::js_error_text(&err)).into());
    }
}

fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}

/// Read the first byte; cloud placeholders fail here
async fn read_first_byte(file: &File) -> Result<(), JsValue> {
    let head = file.slice_with_i32_and_i32(0, 1)?;
    JsFuture::from(head.array_buffer()).await?;
    Ok(())
}

fn reject(input: &HtmlInputElement, err: &AttachmentError) {
    web_sys::console::warn_1(&format!("[ATTACHMENT] {}", err).into());
    input.set_value("");
    notify::attachment_error(err);
}
