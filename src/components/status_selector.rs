//! Status Selector Component
//!
//! Button row narrowing the list by completion status.

use leptos::prelude::*;

/// Status filter options
pub const STATUS_OPTIONS: &[(&str, Option<bool>)] = &[
    ("All", None),
    ("Complete", Some(true)),
    ("Incomplete", Some(false)),
];

/// Status filter buttons for the todo list
#[component]
pub fn StatusSelector(
    current: ReadSignal<Option<bool>>,
    on_change: impl Fn(Option<bool>) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {STATUS_OPTIONS.iter().map(|(label, value)| {
                let value = *value;
                let is_selected = move || current.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change(value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
