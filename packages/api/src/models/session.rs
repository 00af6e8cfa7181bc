//! # Session models
//!
//! The signed-in user and their organization, as returned by `POST /auth/login`
//! and `GET /auth/me`. Only the bearer token outlives a page load; the
//! [`User`] and [`Organization`] are re-fetched from `/auth/me` on startup.

use serde::{Deserialize, Serialize};

use crate::id;

/// The signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "id::deserialize")]
    pub organization_id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// The organization every `/api/v1/orgs/{id}` call is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login` and `GET /auth/me`. The latter leaves `token` empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    pub user: User,
    pub organization: Organization,
}

/// An authenticated session: who, for which organization, with which token.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub organization: Organization,
    pub token: String,
}

impl Session {
    pub fn org_id(&self) -> &str {
        &self.organization.id
    }
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self {
            user: resp.user,
            organization: resp.organization,
            token: resp.token,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_login_with_snowflake_org() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{
                "token": "jwt",
                "user": {"id": 2, "organization_id": 1100401179193344001,
                         "email": "ana@example.com", "name": "", "role": "admin"},
                "organization": {"id": "1100401179193344001", "name": "Acme"}
            }"#,
        )
        .unwrap();
        assert_eq!(resp.user.organization_id, resp.organization.id);
        assert_eq!(resp.user.display_name(), "ana@example.com");

        let session = Session::from(resp);
        assert_eq!(session.org_id(), "1100401179193344001");
        assert_eq!(session.token, "jwt");
    }

    #[test]
    fn test_me_has_no_token() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"user": {"id": "2", "organization_id": "9", "email": "a@b.c"},
                "organization": {"id": 9, "name": "Acme"}}"#,
        )
        .unwrap();
        assert!(resp.token.is_empty());
    }
}
