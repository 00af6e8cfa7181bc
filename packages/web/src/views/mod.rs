//! Route targets. Each one wires a shared view from the `ui` crate to the
//! router of this platform.

mod auth_guard;
pub use auth_guard::AuthGuard;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

mod login;
pub use login::Login;

mod pages;
pub use pages::{ActivityLogs, Dashboard, Inventory, Settings, Skus, Transactions, Users};

mod not_found;
pub use not_found::NotFound;
