use api::{InventoryListParams, SkuListParams, TransactionListParams};
use chrono::Utc;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{ErrorBanner, StatCard};
use crate::filters::{format_currency, is_same_day, low_stock_count, total_inventory_value};
use crate::query::{use_query, QueryKey, INVENTORY, SKUS, TRANSACTIONS};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Headline figures computed from the SKU, inventory and transaction lists.
#[component]
pub fn DashboardView() -> Element {
    let auth = use_auth();
    let skus = use_query(
        || QueryKey::new(SKUS).with(&SkuListParams::default()),
        |api| async move { api.list_skus(&SkuListParams::default()).await },
    );
    let inventory = use_query(
        || QueryKey::new(INVENTORY).with(&InventoryListParams::default()),
        |api| async move { api.list_inventory(&InventoryListParams::default()).await },
    );
    let transactions = use_query(
        || QueryKey::new(TRANSACTIONS).with(&TransactionListParams::default()),
        |api| async move { api.list_transactions(&TransactionListParams::default()).await },
    );

    let greeting = auth()
        .user()
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_else(|| "Welcome to Flex ERP".to_string());

    let loading = "...".to_string();
    let mut errors = Vec::new();

    let sku_count = match &*skus.read() {
        Some(Ok(list)) => list.len().to_string(),
        Some(Err(e)) => {
            errors.push(e.to_string());
            "-".to_string()
        }
        None => loading.clone(),
    };
    let (line_count, low_stock, value) = match &*inventory.read() {
        Some(Ok(lines)) => (
            lines.len().to_string(),
            format!("{} low on stock", low_stock_count(lines)),
            format_currency(total_inventory_value(lines)),
        ),
        Some(Err(e)) => {
            errors.push(e.to_string());
            ("-".to_string(), String::new(), "-".to_string())
        }
        None => (loading.clone(), String::new(), loading.clone()),
    };
    let today = match &*transactions.read() {
        Some(Ok(list)) => {
            let now = Utc::now();
            list.iter()
                .filter(|t| is_same_day(t.created_at, now))
                .count()
                .to_string()
        }
        Some(Err(e)) => {
            errors.push(e.to_string());
            "-".to_string()
        }
        None => loading.clone(),
    };
    errors.dedup();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "{greeting}" }
                }
            }

            for message in errors {
                ErrorBanner { key: "{message}", message: message.clone() }
            }

            div {
                class: "stat-grid",
                StatCard { title: "Total SKUs", value: sku_count }
                StatCard { title: "Inventory Items", value: line_count, detail: low_stock }
                StatCard { title: "Today's Transactions", value: today }
                StatCard { title: "Total Value", value }
            }
        }
    }
}
