use dioxus::prelude::*;
use ui::views::{
    ActivityLogsView, DashboardView, InventoryView, SettingsView, SkusView, TransactionsView,
    UsersView,
};

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn Skus() -> Element {
    rsx! { SkusView {} }
}

#[component]
pub fn Inventory() -> Element {
    rsx! { InventoryView {} }
}

#[component]
pub fn Transactions() -> Element {
    rsx! { TransactionsView {} }
}

#[component]
pub fn Users() -> Element {
    rsx! { UsersView {} }
}

#[component]
pub fn ActivityLogs() -> Element {
    rsx! { ActivityLogsView {} }
}

#[component]
pub fn Settings() -> Element {
    rsx! { SettingsView {} }
}
