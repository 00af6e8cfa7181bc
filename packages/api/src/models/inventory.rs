use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;
use crate::params::QueryParams;

/// A SKU joined with its on-hand stock and cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryLine {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "id::deserialize")]
    pub sku_id: String,
    pub quantity: i64,
    pub weighted_cost: f64,
    pub total_value: f64,
    #[serde(default)]
    pub is_manual_cost: bool,
    pub sku_code: String,
    pub product_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn active_by_default() -> bool {
    true
}

/// Body of `PATCH /api/v1/orgs/{org}/inventory/sku/{sku}/cost`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManualCostRequest {
    pub weighted_cost: f64,
}

/// Filters of the inventory list.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryListParams {
    pub category: String,
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for InventoryListParams {
    fn default() -> Self {
        Self {
            category: String::new(),
            search: String::new(),
            page: 1,
            limit: 50,
        }
    }
}

impl InventoryListParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push("category", &self.category)
            .push("search", &self.search)
            .positive("page", self.page)
            .positive("limit", self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paging() {
        let query = InventoryListParams::default().to_query();
        assert_eq!(query.get("page"), Some("1"));
        assert_eq!(query.get("limit"), Some("50"));
        assert_eq!(query.get("search"), None);
    }

    #[test]
    fn test_decode_line() {
        let line: InventoryLine = serde_json::from_str(
            r#"{
                "id": 9, "organization_id": 1, "sku_id": 3,
                "quantity": 4, "weighted_cost": 12.5, "total_value": 50.0,
                "is_manual_cost": true,
                "sku_code": "ELEC-001", "product_name": "Cable",
                "category": null
            }"#,
        )
        .unwrap();
        assert_eq!(line.sku_id, "3");
        assert!(line.is_manual_cost);
        assert!(line.is_active);
        assert_eq!(line.total_value, 50.0);
    }
}
