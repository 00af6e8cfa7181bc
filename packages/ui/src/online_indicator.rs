//! API reachability indicator for the sidebar header.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{FaCloud, FaCloudArrowUp};
use crate::Icon;

/// Green cloud while the last health check succeeded, orange once it failed.
#[component]
pub fn OnlineIndicator() -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading {
        return rsx! {};
    }

    if state.online {
        rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Connected",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        }
    } else {
        rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "API unreachable",
                Icon { icon: FaCloudArrowUp, width: 14, height: 14 }
            }
        }
    }
}
