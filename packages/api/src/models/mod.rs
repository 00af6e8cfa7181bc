//! Wire models of the REST API.

use serde::{Deserialize, Deserializer};

mod change_log;
mod field_alias;
mod inventory;
mod session;
mod sku;
mod transaction;
mod user;

pub use change_log::{
    ActivitySummary, ChangeLog, ChangeLogParams, UserActivity, CHANGE_TYPES, ENTITY_TYPES, PERIODS,
};
pub use field_alias::{
    table_label, CreateFieldAliasRequest, FieldAlias, TableFields, TableFieldsMetadata,
    UpdateFieldAliasRequest, SUPPORTED_TABLES,
};
pub use inventory::{InventoryLine, InventoryListParams, ManualCostRequest};
pub use session::{HealthStatus, LoginRequest, LoginResponse, Organization, Session, User};
pub use sku::{CreateSkuRequest, Sku, SkuList, SkuListParams, SkuStatusRequest, UpdateSkuRequest};
pub use transaction::{
    CreateTransactionRequest, Direction, Transaction, TransactionListParams, TransactionSummary,
};
pub use user::{
    CreateUserRequest, ManagedUser, Permission, RoleList, UpdateUserRequest, UserList,
    UserListParams, UserRole, DEFAULT_ROLE, ROLE_NAMES,
};

/// Lists inside response objects come back as `null` when empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
