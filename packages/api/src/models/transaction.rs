use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id;
use crate::params::QueryParams;

/// Stock movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::In, Direction::Out];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }

    /// Human label used by filters and summary cards.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::In => "Inbound",
            Direction::Out => "Outbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "in" => Ok(Direction::In),
            "out" => Ok(Direction::Out),
            other => Err(format!("Unknown transaction type: {other}")),
        }
    }
}

/// A recorded stock movement, joined with its SKU and creator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "id::deserialize")]
    pub sku_id: String,
    pub transaction_type: Direction,
    pub quantity: i64,
    pub unit_cost: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "id::deserialize_option")]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sku_code: String,
    pub product_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_by_name: String,
}

/// Body of `POST /api/v1/orgs/{org}/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTransactionRequest {
    #[serde(serialize_with = "id::serialize", deserialize_with = "id::deserialize")]
    pub sku_id: String,
    pub transaction_type: Direction,
    pub quantity: i64,
    pub unit_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-direction totals from `GET /transactions/summary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionSummary {
    pub transaction_type: Direction,
    pub total_transactions: i64,
    pub total_quantity: i64,
    pub total_value: f64,
}

/// Filters of the transaction list. The summary uses the subset it supports.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionListParams {
    pub transaction_type: Option<Direction>,
    pub sku_id: Option<String>,
    pub category: String,
    pub search: String,
    pub page: u32,
    pub limit: u32,
    pub start_date: String,
    pub end_date: String,
}

impl Default for TransactionListParams {
    fn default() -> Self {
        Self {
            transaction_type: None,
            sku_id: None,
            category: String::new(),
            search: String::new(),
            page: 1,
            limit: 50,
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl TransactionListParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("transaction_type", self.transaction_type)
            .push_opt("sku_id", self.sku_id.as_deref())
            .push("category", &self.category)
            .push("search", &self.search)
            .positive("page", self.page)
            .positive("limit", self.limit)
            .push("start_date", &self.start_date)
            .push("end_date", &self.end_date)
    }

    pub fn to_summary_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("sku_id", self.sku_id.as_deref())
            .push("category", &self.category)
            .push("start_date", &self.start_date)
            .push("end_date", &self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("in".parse::<Direction>(), Ok(Direction::In));
        assert_eq!("out".parse::<Direction>(), Ok(Direction::Out));
        assert!("".parse::<Direction>().is_err());
        assert_eq!(Direction::Out.label(), "Outbound");
    }

    #[test]
    fn test_create_body() {
        let req = CreateTransactionRequest {
            sku_id: "12".into(),
            transaction_type: Direction::In,
            quantity: 5,
            unit_cost: 2.5,
            reference_number: Some("PO-7".into()),
            notes: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sku_id": 12,
                "transaction_type": "in",
                "quantity": 5,
                "unit_cost": 2.5,
                "reference_number": "PO-7",
            })
        );
    }

    #[test]
    fn test_summary_query_ignores_list_only_filters() {
        let params = TransactionListParams {
            transaction_type: Some(Direction::Out),
            search: "cable".into(),
            category: "Electronics".into(),
            ..Default::default()
        };
        let list = params.to_query();
        assert_eq!(list.get("transaction_type"), Some("out"));
        assert_eq!(list.get("search"), Some("cable"));

        let summary = params.to_summary_query();
        assert_eq!(summary.get("transaction_type"), None);
        assert_eq!(summary.get("search"), None);
        assert_eq!(summary.get("page"), None);
        assert_eq!(summary.get("category"), Some("Electronics"));
    }
}
