//! One `impl ApiClient` block per resource.

mod auth;
mod change_logs;
mod field_aliases;
mod inventory;
mod skus;
mod transactions;
mod users;
