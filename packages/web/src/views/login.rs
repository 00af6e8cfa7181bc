//! Login page.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::LoginView;

use crate::{redirect_for, Route};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in
    if let Some(target) = redirect_for(&Route::Login {}, auth().is_authenticated()) {
        nav.replace(target);
        return rsx! {};
    }

    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
        }
    }
}
