use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;
use crate::params::QueryParams;

/// Entity types recorded in the audit trail, with their filter labels.
pub const ENTITY_TYPES: [(&str, &str); 5] = [
    ("sku", "SKUs"),
    ("inventory", "Inventory"),
    ("transaction", "Transactions"),
    ("user", "Users"),
    ("field_alias", "Settings"),
];

/// Change types recorded in the audit trail, with their filter labels.
pub const CHANGE_TYPES: [(&str, &str); 6] = [
    ("create", "Created"),
    ("update", "Updated"),
    ("delete", "Deleted"),
    ("activate", "Activated"),
    ("deactivate", "Deactivated"),
    ("manual_cost_update", "Cost updated"),
];

/// Look-back windows offered on the activity page, in days.
pub const PERIODS: [(u32, &str); 4] = [
    (1, "Last 24 hours"),
    (7, "Last 7 days"),
    (30, "Last 30 days"),
    (90, "Last 90 days"),
];

/// One audit-trail entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeLog {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "id::deserialize_option")]
    pub user_id: Option<String>,
    pub entity_type: String,
    #[serde(default, deserialize_with = "id::deserialize_option")]
    pub entity_id: Option<String>,
    #[serde(default, deserialize_with = "id::deserialize_option")]
    pub sku_id: Option<String>,
    pub change_type: String,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub sku_code: Option<String>,
    #[serde(default)]
    pub sku_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserActivity {
    #[serde(deserialize_with = "id::deserialize")]
    pub user_id: String,
    pub user_name: String,
    pub changes: i64,
}

/// Body of `GET /api/v1/orgs/{org}/activity-summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivitySummary {
    #[serde(default)]
    pub total_changes: i64,
    /// Changes in the last 24 hours.
    #[serde(default)]
    pub recent_changes: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub top_users: Vec<UserActivity>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub changes_by_type: BTreeMap<String, i64>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub recent_activity: Vec<ChangeLog>,
}

/// Filters of the change-log list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeLogParams {
    pub last_days: u32,
    pub limit: u32,
    pub entity_type: String,
    pub change_type: String,
}

impl Default for ChangeLogParams {
    fn default() -> Self {
        Self {
            last_days: 30,
            limit: 100,
            entity_type: String::new(),
            change_type: String::new(),
        }
    }
}

impl ChangeLogParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .positive("last_days", self.last_days)
            .positive("limit", self.limit)
            .push("entity_type", &self.entity_type)
            .push("change_type", &self.change_type)
    }
}
