use dioxus::prelude::*;
use ui::views::NotFoundView;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    rsx! {
        NotFoundView {
            path: segments.join("/"),
            on_home: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
