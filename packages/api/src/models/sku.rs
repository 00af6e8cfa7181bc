use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;
use crate::params::QueryParams;

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sku {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "id::deserialize_option")]
    pub organization_id: Option<String>,
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
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `GET /api/v1/orgs/{org}/skus`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkuList {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub skus: Vec<Sku>,
}

/// Body of `POST /api/v1/orgs/{org}/skus`. Blank optionals are left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateSkuRequest {
    pub sku_code: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

/// Body of `PATCH /api/v1/orgs/{org}/skus/{id}`. The code is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateSkuRequest {
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkuStatusRequest {
    pub is_active: bool,
}

/// Filters of the SKU list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkuListParams {
    pub include_deactivated: bool,
    pub category: String,
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl SkuListParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .flag("includeDeactivated", self.include_deactivated)
            .push("category", &self.category)
            .push("search", &self.search)
            .positive("page", self.page)
            .positive("limit", self.limit)
    }
}
