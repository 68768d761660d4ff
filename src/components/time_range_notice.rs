//! Time Range Notice
//!
//! Inline error under the clock inputs, visible while the range is invalid.

use leptos::prelude::*;
use reserva_cart::TimeRangeIssue;

#[component]
pub fn TimeRangeNotice(issue: ReadSignal<Option<TimeRangeIssue>>) -> impl IntoView {
    view! {
        <Show when=move || issue.get().is_some()>
            <div class="invalid-feedback d-block" role="alert">
                {move || issue.get().map(|issue| issue.to_string()).unwrap_or_default()}
            </div>
        </Show>
    }
}
