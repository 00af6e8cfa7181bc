//! This crate contains all shared UI for the console: the auth context, the
//! query cache, form and filter logic, and every page view. Platform crates
//! supply the router and map [`NavItem`]s to their routes.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub mod filters;
pub mod forms;

pub mod query;
pub use query::{use_mutator, use_query, use_query_client, Mutator, QueryCache, QueryClient, QueryKey};

mod auth;
pub use auth::{
    login, logout, restore_session, use_api, use_auth, use_config, AuthProvider, AuthState,
    LogoutButton,
};

mod online_indicator;
pub use online_indicator::OnlineIndicator;

mod sidebar;
pub use sidebar::{AppSidebar, NavItem};
