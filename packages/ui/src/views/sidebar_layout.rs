use dioxus::prelude::*;

use crate::auth::{restore_session, use_auth, use_config};
use crate::components::{Button, ButtonVariant, Spinner};
use crate::{AppSidebar, LogoutButton, NavItem};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared shell around every protected page.
///
/// The platform package maps [`NavItem`]s to its routes and passes the router
/// outlet as children. Children only render once the session is restored, so
/// pages can rely on an organization being known.
#[component]
pub fn SidebarLayoutView(
    /// Section highlighted in the sidebar.
    active: Option<NavItem>,
    on_navigate: EventHandler<NavItem>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let base_url = use_config().api.base_url;
    let mut retrying = use_signal(|| false);
    let state = auth();

    let retry = move |_| {
        let base_url = base_url.clone();
        spawn(async move {
            retrying.set(true);
            restore_session(auth, &base_url).await;
            retrying.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "app-shell",
            AppSidebar { active, on_navigate }

            main {
                class: "app-content",
                if state.session.is_some() {
                    {children}
                } else if state.loading {
                    Spinner { label: "Restoring session..." }
                } else {
                    div {
                        class: "offline-panel",
                        h2 { "Cannot reach the Flex ERP API" }
                        p { "Your session is kept. Retry once the server is back." }
                        div {
                            class: "form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: retrying(),
                                onclick: retry,
                                if retrying() { "Retrying..." } else { "Retry" }
                            }
                            LogoutButton { class: "button button-outline" }
                        }
                    }
                }
            }
        }
    }
}
