use api::{Direction, SkuListParams, Transaction, TransactionListParams};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{
    Badge, Button, ButtonVariant, EmptyState, ErrorBanner, Input, Label, Select, Spinner,
    StatCard, Textarea,
};
use crate::filters::{active_skus, distinct_categories, format_currency, format_timestamp};
use crate::forms::TransactionForm;
use crate::query::{
    use_mutator, use_query, QueryKey, ON_TRANSACTION, SKUS, TRANSACTIONS, TRANSACTION_SUMMARY,
};

use super::ModalOverlay;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn direction_options(all_label: &str) -> Vec<(String, String)> {
    std::iter::once((String::new(), all_label.to_string()))
        .chain(
            Direction::ALL
                .iter()
                .map(|d| (d.as_str().to_string(), d.label().to_string())),
        )
        .collect()
}

fn direction_badge(direction: Direction) -> &'static str {
    match direction {
        Direction::In => "badge badge-green",
        Direction::Out => "badge badge-red",
    }
}

/// Stock movement ledger with per-direction totals and the entry dialog.
#[component]
pub fn TransactionsView() -> Element {
    let mut search = use_signal(String::new);
    let mut direction = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);

    let mut show_dialog = use_signal(|| false);

    let params = use_memo(move || TransactionListParams {
        transaction_type: direction().parse().ok(),
        category: category(),
        search: search().trim().to_string(),
        start_date: start_date(),
        end_date: end_date(),
        ..Default::default()
    });
    let mut transactions = use_query(
        move || QueryKey::new(TRANSACTIONS).with(&params()),
        move |api| {
            let params = params();
            async move { api.list_transactions(&params).await }
        },
    );
    let summary = use_query(
        move || QueryKey::new(TRANSACTION_SUMMARY).with(&params()),
        move |api| {
            let params = params();
            async move { api.transaction_summary(&params).await }
        },
    );

    let listed: Vec<Transaction> = match &*transactions.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let mut categories = distinct_categories(listed.iter().map(|t| t.category.as_deref()));
    if !category().is_empty() && !categories.contains(&category()) {
        categories.push(category());
    }
    let category_options: Vec<(String, String)> =
        std::iter::once((String::new(), "All Categories".to_string()))
            .chain(categories.into_iter().map(|c| (c.clone(), c)))
            .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Transactions" }
                    p { class: "page-subtitle", "Record and review stock movements" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| show_dialog.set(true),
                    "New Transaction"
                }
            }

            if let Some(Ok(totals)) = &*summary.read() {
                div {
                    class: "stat-grid stat-grid-2",
                    for item in totals.iter() {
                        StatCard {
                            key: "{item.transaction_type}",
                            title: item.transaction_type.label(),
                            value: item.total_transactions.to_string(),
                            detail: format!("{} units \u{2022} {}", item.total_quantity, format_currency(item.total_value)),
                        }
                    }
                }
            }

            div {
                class: "filter-bar",
                Input {
                    class: "filter-search",
                    placeholder: "Search by SKU, product name, reference, or notes...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                Select {
                    value: direction(),
                    options: direction_options("All Types"),
                    onchange: move |evt: FormEvent| direction.set(evt.value()),
                }
                Select {
                    value: category(),
                    options: category_options,
                    onchange: move |evt: FormEvent| category.set(evt.value()),
                }
                Input {
                    r#type: "date",
                    value: start_date(),
                    oninput: move |evt: FormEvent| start_date.set(evt.value()),
                }
                Input {
                    r#type: "date",
                    value: end_date(),
                    oninput: move |evt: FormEvent| end_date.set(evt.value()),
                }
            }

            match &*transactions.read() {
                None => rsx! { Spinner { label: "Loading transactions..." } },
                Some(Err(e)) => rsx! {
                    ErrorBanner {
                        message: e.to_string(),
                        on_retry: move |_| transactions.restart(),
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { message: "No transactions found" } },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "table-wrap",
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Type" }
                                    th { "SKU" }
                                    th { "Product" }
                                    th { "Quantity" }
                                    th { "Unit Cost" }
                                    th { "Total" }
                                    th { "Reference" }
                                    th { "Created By" }
                                }
                            }
                            tbody {
                                for txn in list.iter() {
                                    tr {
                                        key: "{txn.id}",
                                        td { {format_timestamp(txn.created_at)} }
                                        td {
                                            Badge { class: direction_badge(txn.transaction_type), "{txn.transaction_type.label()}" }
                                        }
                                        td { class: "mono", "{txn.sku_code}" }
                                        td {
                                            div { class: "cell-title", "{txn.product_name}" }
                                            if let Some(notes) = &txn.notes {
                                                div { class: "cell-detail", "{notes}" }
                                            }
                                        }
                                        td { "{txn.quantity}" }
                                        td { {format_currency(txn.unit_cost)} }
                                        td { {format_currency(txn.total_cost)} }
                                        td { {txn.reference_number.as_deref().unwrap_or("-")} }
                                        td { "{txn.created_by_name}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }

        if show_dialog() {
            ModalOverlay {
                title: "New Transaction",
                on_close: move |_| show_dialog.set(false),
                TransactionDialog { on_done: move |_| show_dialog.set(false) }
            }
        }
    }
}

#[component]
fn TransactionDialog(on_done: EventHandler<()>) -> Element {
    let mut form = use_signal(TransactionForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let skus = use_query(
        move || QueryKey::new(SKUS).with(&SkuListParams::default()),
        move |api| async move { api.list_skus(&SkuListParams::default()).await },
    );
    let sku_options: Vec<(String, String)> = {
        let mut options = vec![(String::new(), "Select SKU".to_string())];
        if let Some(Ok(list)) = &*skus.read() {
            options.extend(
                active_skus(list)
                    .into_iter()
                    .map(|s| (s.id.clone(), format!("{} - {}", s.sku_code, s.product_name))),
            );
        }
        options
    };

    let api = use_api();
    let mutator = use_mutator();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = match form.read().to_request() {
            Ok(req) => req,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            error.set(None);
            let direction = req.transaction_type;
            let quantity = req.quantity;
            let result = mutator
                .run(ON_TRANSACTION, async move { api.create_transaction(&req).await })
                .await;
            saving.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Recorded {direction} transaction of {quantity} units");
                    on_done.call(());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let current = form();
    let estimated = current.estimated_total().map(format_currency);
    let type_options: Vec<(String, String)> = Direction::ALL
        .iter()
        .map(|d| {
            let hint = match d {
                Direction::In => "Inbound (Receive Stock)",
                Direction::Out => "Outbound (Remove Stock)",
            };
            (d.as_str().to_string(), hint.to_string())
        })
        .collect();

    rsx! {
        form {
            onsubmit: onsubmit,
            if let Some(message) = error() {
                ErrorBanner { message }
            }
            div {
                class: "form-field",
                Label { html_for: "txn-sku", "SKU *" }
                Select {
                    id: "txn-sku",
                    value: current.sku_id.clone(),
                    options: sku_options,
                    onchange: move |evt: FormEvent| form.write().sku_id = evt.value(),
                }
            }
            div {
                class: "form-grid",
                div {
                    class: "form-field",
                    Label { html_for: "txn-type", "Type *" }
                    Select {
                        id: "txn-type",
                        value: current.direction.clone(),
                        options: type_options,
                        onchange: move |evt: FormEvent| form.write().direction = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "txn-quantity", "Quantity *" }
                    Input {
                        id: "txn-quantity",
                        r#type: "number",
                        min: "1",
                        step: "1",
                        value: current.quantity.clone(),
                        oninput: move |evt: FormEvent| form.write().quantity = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "txn-cost", "Unit Cost *" }
                    Input {
                        id: "txn-cost",
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: current.unit_cost.clone(),
                        oninput: move |evt: FormEvent| form.write().unit_cost = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "txn-reference", "Reference Number" }
                    Input {
                        id: "txn-reference",
                        placeholder: "PO-1001",
                        value: current.reference_number.clone(),
                        oninput: move |evt: FormEvent| form.write().reference_number = evt.value(),
                    }
                }
            }
            div {
                class: "form-field",
                Label { html_for: "txn-notes", "Notes" }
                Textarea {
                    id: "txn-notes",
                    value: current.notes.clone(),
                    oninput: move |evt: FormEvent| form.write().notes = evt.value(),
                }
            }
            if let Some(total) = estimated {
                p { class: "form-hint", "Estimated total: {total}" }
            }
            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_done.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Create Transaction" }
                }
            }
        }
    }
}
