use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;

/// Tables whose columns can be relabelled, with their page labels.
pub const SUPPORTED_TABLES: [(&str, &str); 4] = [
    ("skus", "Products (SKUs)"),
    ("inventory", "Inventory"),
    ("inventory_transactions", "Transactions"),
    ("users", "Users"),
];

/// Page label of a table, or the raw name for unknown tables.
pub fn table_label(table: &str) -> &str {
    SUPPORTED_TABLES
        .iter()
        .find(|(name, _)| *name == table)
        .map(|(_, label)| *label)
        .unwrap_or(table)
}

/// An organization's display override for one column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldAlias {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    pub table_name: String,
    pub field_name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableFieldsMetadata {
    pub total_fields: i64,
    pub hidden_fields: i64,
    pub custom_aliases: i64,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Body of `GET /api/v1/orgs/{org}/tables/{table}/fields`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableFields {
    pub table_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub fields: Vec<FieldAlias>,
    #[serde(default)]
    pub metadata: Option<TableFieldsMetadata>,
}

impl TableFields {
    /// Fields in display order: `sort_order`, then field name.
    pub fn sorted_fields(&self) -> Vec<FieldAlias> {
        let mut fields = self.fields.clone();
        fields.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.field_name.cmp(&b.field_name))
        });
        fields
    }
}

/// Body of `POST /api/v1/orgs/{org}/field-aliases`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateFieldAliasRequest {
    pub table_name: String,
    pub field_name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_hidden: bool,
    pub sort_order: i32,
}

/// Body of `PATCH /api/v1/orgs/{org}/field-aliases/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateFieldAliasRequest {
    pub display_name: String,
    pub description: String,
    pub is_hidden: bool,
    pub sort_order: i32,
}
