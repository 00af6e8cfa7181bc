//! Client-side filtering, formatting and badge helpers shared by the pages.
//!
//! Everything here is pure so it can be tested without a renderer.

use std::collections::BTreeSet;

use api::{ChangeLog, InventoryLine, ManagedUser, Sku};
use chrono::{DateTime, Local, Utc};

/// Quantity below which a line counts as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Sorted, de-duplicated non-empty categories.
pub fn distinct_categories<'a, I>(categories: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    categories
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn sku_categories(skus: &[Sku]) -> Vec<String> {
    distinct_categories(skus.iter().map(|s| s.category.as_deref()))
}

pub fn inventory_categories(lines: &[InventoryLine]) -> Vec<String> {
    distinct_categories(lines.iter().map(|l| l.category.as_deref()))
}

/// SKUs that can take new transactions.
pub fn active_skus(skus: &[Sku]) -> Vec<Sku> {
    skus.iter().filter(|s| s.is_active).cloned().collect()
}

pub fn low_stock_count(lines: &[InventoryLine]) -> usize {
    lines
        .iter()
        .filter(|l| l.quantity < LOW_STOCK_THRESHOLD)
        .count()
}

pub fn total_inventory_value(lines: &[InventoryLine]) -> f64 {
    lines.iter().map(|l| l.total_value).sum()
}

pub fn active_user_count(users: &[ManagedUser]) -> usize {
    users.iter().filter(|u| u.is_active).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    Low,
    InStock,
}

impl StockStatus {
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Low => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "badge badge-red",
            StockStatus::Low => "badge badge-amber",
            StockStatus::InStock => "badge badge-green",
        }
    }
}

/// Formats an amount as US dollars: `$1,234.56`, `-$3.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// "5 minutes ago", "3 hours ago", "2 days ago", then the calendar date.
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let hours = elapsed.num_hours();
    if hours < 1 {
        format!("{} minutes ago", elapsed.num_minutes().max(0))
    } else if hours < 24 {
        format!("{hours} hours ago")
    } else if hours / 24 < 7 {
        format!("{} days ago", hours / 24)
    } else {
        at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
    }
}

/// Date and time in the browser's zone, e.g. `Mar 4, 2024, 09:15`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%b %-d, %Y, %H:%M").to_string()
}

/// Whether `at` falls on the same local calendar day as `now`.
pub fn is_same_day(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    at.with_timezone(&Local).date_naive() == now.with_timezone(&Local).date_naive()
}

/// One-line summary of an audit entry.
pub fn change_description(log: &ChangeLog) -> String {
    let entity = log.entity_type.as_str();
    let name = log
        .sku_code
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(entity);
    match log.change_type.as_str() {
        "create" => format!("Created {entity} {name}"),
        "update" => format!("Updated {entity} {name}"),
        "delete" => format!("Deleted {entity} {name}"),
        "activate" => format!("Activated {entity} {name}"),
        "deactivate" => format!("Deactivated {entity} {name}"),
        "manual_cost_update" => format!("Updated cost for {name}"),
        other => format!("{other} on {entity} {name}"),
    }
}

pub fn change_type_badge(change_type: &str) -> &'static str {
    match change_type {
        "create" => "badge badge-green",
        "update" => "badge badge-blue",
        "delete" => "badge badge-red",
        "activate" => "badge badge-emerald",
        "deactivate" => "badge badge-orange",
        "manual_cost_update" => "badge badge-purple",
        _ => "badge badge-gray",
    }
}

pub fn role_badge(role: &str) -> &'static str {
    match role {
        "admin" => "badge badge-red",
        "manager" => "badge badge-blue",
        "user" => "badge badge-green",
        _ => "badge badge-gray",
    }
}

/// Tri-state active filter as offered by the `<select>` on the users page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub const ALL: [ActiveFilter; 3] = [ActiveFilter::All, ActiveFilter::Active, ActiveFilter::Inactive];

    pub fn from_value(value: &str) -> Self {
        match value {
            "true" => ActiveFilter::Active,
            "false" => ActiveFilter::Inactive,
            _ => ActiveFilter::All,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            ActiveFilter::All => "all",
            ActiveFilter::Active => "true",
            ActiveFilter::Inactive => "false",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveFilter::All => "All Status",
            ActiveFilter::Active => "Active",
            ActiveFilter::Inactive => "Inactive",
        }
    }

    /// The `is_active` query value; `None` for all.
    pub fn as_option(&self) -> Option<bool> {
        match self {
            ActiveFilter::All => None,
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
        }
    }
}

/// Set of chosen values for a multi-select filter. An empty selection
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelect {
    selected: BTreeSet<String>,
}

impl MultiSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the value if absent, removes it if present.
    pub fn toggle(&mut self, value: &str) {
        if !self.selected.remove(value) {
            self.selected.insert(value.to_string());
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        self.selected.is_empty() || value.is_some_and(|v| self.selected.contains(v))
    }

    /// Button text: the placeholder, the single value, or a count.
    pub fn summary(&self, placeholder: &str) -> String {
        match self.selected.len() {
            0 => placeholder.to_string(),
            1 => self.selected.iter().next().cloned().unwrap_or_default(),
            n => format!("{n} selected"),
        }
    }

    /// Drops values that are no longer offered.
    pub fn retain_options(&mut self, options: &[String]) {
        self.selected.retain(|v| options.contains(v));
    }
}
