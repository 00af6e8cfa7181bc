use dioxus::prelude::*;
use ui::use_auth;

use crate::{redirect_for, Route};

/// Sends visitors without a token to the login page.
///
/// Also covers signing out: clearing the token re-renders the guard, which
/// then leaves the protected area.
#[component]
pub fn AuthGuard() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    if let Some(target) = redirect_for(&route, auth().is_authenticated()) {
        tracing::debug!("Redirecting {route} to {target}");
        nav.replace(target);
        return rsx! {};
    }

    rsx! { Outlet::<Route> {} }
}
