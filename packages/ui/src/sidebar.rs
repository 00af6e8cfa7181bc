use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{
    FaBoxesStacked, FaChartLine, FaClockRotateLeft, FaGear, FaRightLeft, FaTags, FaUsers,
};
use crate::{Icon, LogoutButton, OnlineIndicator};

/// Sections reachable from the sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Skus,
    Inventory,
    Transactions,
    Users,
    ActivityLogs,
    Settings,
}

impl NavItem {
    pub const ALL: [NavItem; 7] = [
        NavItem::Dashboard,
        NavItem::Skus,
        NavItem::Inventory,
        NavItem::Transactions,
        NavItem::Users,
        NavItem::ActivityLogs,
        NavItem::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "Dashboard",
            NavItem::Skus => "SKUs",
            NavItem::Inventory => "Inventory",
            NavItem::Transactions => "Transactions",
            NavItem::Users => "Users",
            NavItem::ActivityLogs => "Activity Logs",
            NavItem::Settings => "Settings",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "/dashboard",
            NavItem::Skus => "/skus",
            NavItem::Inventory => "/inventory",
            NavItem::Transactions => "/transactions",
            NavItem::Users => "/users",
            NavItem::ActivityLogs => "/logs",
            NavItem::Settings => "/settings",
        }
    }
}

#[component]
fn NavIcon(item: NavItem) -> Element {
    match item {
        NavItem::Dashboard => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        NavItem::Skus => rsx! { Icon { icon: FaTags, width: 16, height: 16 } },
        NavItem::Inventory => rsx! { Icon { icon: FaBoxesStacked, width: 16, height: 16 } },
        NavItem::Transactions => rsx! { Icon { icon: FaRightLeft, width: 16, height: 16 } },
        NavItem::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavItem::ActivityLogs => rsx! { Icon { icon: FaClockRotateLeft, width: 16, height: 16 } },
        NavItem::Settings => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
    }
}

#[component]
pub fn AppSidebar(active: Option<NavItem>, on_navigate: EventHandler<NavItem>) -> Element {
    let auth = use_auth();
    let state = auth();
    let user_name = state.user().map(|u| u.display_name().to_string());
    let org_name = state.organization().map(|o| o.name.clone());

    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                span { class: "sidebar-brand-name", "Flex ERP" }
                OnlineIndicator {}
            }

            ul {
                class: "sidebar-menu",
                for item in NavItem::ALL {
                    li {
                        key: "{item.path()}",
                        button {
                            class: if active == Some(item) { "sidebar-item active" } else { "sidebar-item" },
                            onclick: move |_| on_navigate.call(item),
                            NavIcon { item }
                            span { "{item.label()}" }
                        }
                    }
                }
            }

            div {
                class: "sidebar-footer",
                if let Some(name) = user_name {
                    p { class: "sidebar-user-name", "{name}" }
                }
                if let Some(org) = org_name {
                    p { class: "sidebar-org-name", "{org}" }
                }
                LogoutButton { class: "sidebar-item" }
            }
        }
    }
}
