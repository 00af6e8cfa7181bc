//! # API crate: typed REST client for the Flex ERP server
//!
//! Everything the console knows about the wire lives here: the request and
//! response models, the query-string builders and the [`ApiClient`] that
//! issues the calls. The client runs on `reqwest`, which uses the browser's
//! `fetch` when compiled to WASM and hyper natively (tests).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, bearer token, organization scope, response handling |
//! | [`error`] | [`ApiError`] and the rule that picks a failed response's message |
//! | [`models`] | Serde models for sessions, SKUs, inventory, transactions, users, change logs and field aliases |
//! | [`params`] | [`QueryParams`], the ordered query string that drops empty filters |
//! | [`id`] | Serde helpers accepting ids as JSON numbers or strings |
//!
//! ## Operations
//!
//! - **Public**: `health`, `login`
//! - **Session**: `me`
//! - **SKUs**: `list_skus`, `create_sku`, `update_sku`, `set_sku_status`
//! - **Inventory**: `list_inventory`, `set_manual_cost`
//! - **Transactions**: `list_transactions`, `create_transaction`, `transaction_summary`
//! - **Users**: `list_users`, `list_roles`, `create_user`, `update_user`, `delete_user`
//! - **Audit**: `list_change_logs`, `activity_summary`
//! - **Field aliases**: `table_fields`, `create_field_alias`, `update_field_alias`, `initialize_table_fields`

pub mod client;
mod endpoints;
pub mod error;
pub mod id;
pub mod models;
pub mod params;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::*;
pub use params::QueryParams;
