use dioxus::prelude::*;

/// Pill-shaped label; `class` picks the colour (see `filters::StockStatus`).
#[component]
pub fn Badge(#[props(default = "badge badge-gray".to_string())] class: String, children: Element) -> Element {
    rsx! {
        span { class: "{class}", {children} }
    }
}

/// Headline number on the dashboard and summary rows.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] detail: String,
    #[props(default)] tone: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card {tone}",
            p { class: "stat-card-title", "{title}" }
            p { class: "stat-card-value", "{value}" }
            if !detail.is_empty() {
                p { class: "stat-card-detail", "{detail}" }
            }
        }
    }
}
