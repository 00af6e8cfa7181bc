use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-row",
            span { class: "spinner" }
            span { "{label}" }
        }
    }
}

/// Inline error next to the control that triggered it.
#[component]
pub fn ErrorBanner(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            span { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "button button-outline",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", "{message}" }
    }
}
