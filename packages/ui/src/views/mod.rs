mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayoutView;

mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod skus;
pub use skus::SkusView;

mod inventory;
pub use inventory::InventoryView;

mod transactions;
pub use transactions::TransactionsView;

mod users;
pub use users::UsersView;

mod logs;
pub use logs::ActivityLogsView;

mod settings;
pub use settings::SettingsView;

mod not_found;
pub use not_found::NotFoundView;

/// Browser confirmation prompt. Always accepts outside the browser.
pub(crate) fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
