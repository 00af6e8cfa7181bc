use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "centered-page",
            h1 { class: "page-title", "Page not found" }
            p { class: "page-subtitle", "Nothing lives at /{path}." }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_home.call(()),
                "Back to dashboard"
            }
        }
    }
}
