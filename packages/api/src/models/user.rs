//! # Organization user management models
//!
//! [`ManagedUser`] is a member of the organization as listed on the Users page;
//! it is distinct from the signed-in [`crate::User`]. Roles are server-defined
//! records ([`UserRole`]) whose names are one of [`ROLE_NAMES`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;
use crate::params::QueryParams;

/// Role names accepted by the user endpoints.
pub const ROLE_NAMES: [&str; 4] = ["admin", "manager", "user", "viewer"];

/// Role given to newly created users unless another is chosen.
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagedUser {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_active: bool,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub organization_name: String,
}

/// Body of `GET /api/v1/orgs/{org}/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserList {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub users: Vec<ManagedUser>,
    #[serde(default)]
    pub pagination: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Permission {
    pub resource: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRole {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub permissions: Vec<Permission>,
}

/// Body of `GET /api/v1/orgs/{org}/users/roles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoleList {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub roles: Vec<UserRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateUserRequest {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    /// The update that flips a user's active flag and keeps everything else.
    pub fn toggle_active(user: &ManagedUser) -> Self {
        Self {
            name: user.name.clone(),
            role: user.role.clone(),
            is_active: Some(!user.is_active),
        }
    }
}

/// Filters of the user list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListParams {
    pub role: String,
    pub is_active: Option<bool>,
    pub search: String,
}

impl UserListParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("role", &self.role)
            .push_opt("is_active", self.is_active)
            .push("search", &self.search)
    }
}
