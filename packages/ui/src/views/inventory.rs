use api::{InventoryLine, InventoryListParams};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{
    Badge, Button, ButtonVariant, Checkbox, EmptyState, ErrorBanner, Input, Spinner, StatCard,
};
use crate::filters::{
    format_currency, inventory_categories, low_stock_count, total_inventory_value, MultiSelect,
    StockStatus,
};
use crate::forms::{parse_cost, InlineEdit};
use crate::query::{use_mutator, use_query, QueryKey, INVENTORY, ON_COST_CHANGE};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Stock levels with weighted costs. The cost column is edited inline.
#[component]
pub fn InventoryView() -> Element {
    let mut search = use_signal(String::new);
    let categories = use_signal(MultiSelect::new);
    let mut cost_edit = use_signal(InlineEdit::<String, String>::new);
    let mut cost_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let params = use_memo(move || InventoryListParams {
        search: search().trim().to_string(),
        ..Default::default()
    });
    let mut inventory = use_query(
        move || QueryKey::new(INVENTORY).with(&params()),
        move |api| {
            let params = params();
            async move { api.list_inventory(&params).await }
        },
    );

    let api = use_api();
    let mutator = use_mutator();

    // Saves the open draft; the editor closes only once the server accepted it.
    let save_cost = move || {
        let api = api.clone();
        let Some((sku_id, draft)) = cost_edit.peek().key().cloned().zip(cost_edit.peek().value().cloned())
        else {
            return;
        };
        let cost = match parse_cost(&draft) {
            Ok(cost) => cost,
            Err(message) => {
                cost_error.set(Some(message));
                return;
            }
        };
        spawn(async move {
            saving.set(true);
            cost_error.set(None);
            let result = mutator
                .run(ON_COST_CHANGE, async move { api.set_manual_cost(&sku_id, cost).await })
                .await;
            match result {
                Ok(()) => {
                    tracing::info!("Manual cost set to {cost}");
                    cost_edit.write().cancel();
                }
                Err(message) => cost_error.set(Some(message)),
            }
            saving.set(false);
        });
    };

    let all_lines: Vec<InventoryLine> = match &*inventory.read() {
        Some(Ok(lines)) => lines.clone(),
        _ => Vec::new(),
    };
    let options = inventory_categories(&all_lines);
    let lines: Vec<InventoryLine> = all_lines
        .into_iter()
        .filter(|line| categories.read().matches(line.category.as_deref()))
        .collect();
    let total_value = format_currency(total_inventory_value(&lines));
    let low_stock = low_stock_count(&lines).to_string();
    let item_count = lines.len().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Inventory Management" }
                    p { class: "page-subtitle", "Track and manage your product inventory" }
                }
            }

            div {
                class: "filter-bar",
                Input {
                    class: "filter-search",
                    placeholder: "Search by SKU, product name, or description...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                CategoryFilter { options, selected: categories }
            }

            if let Some(message) = cost_error() {
                ErrorBanner { message }
            }

            match &*inventory.read() {
                None => rsx! { Spinner {} },
                Some(Err(e)) => rsx! {
                    ErrorBanner {
                        message: format!("Error loading inventory: {e}"),
                        on_retry: move |_| inventory.restart(),
                    }
                },
                Some(Ok(_)) if lines.is_empty() => rsx! { EmptyState { message: "No inventory items found" } },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "table-wrap",
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Product" }
                                    th { "SKU" }
                                    th { "Category" }
                                    th { "Quantity" }
                                    th { "Cost" }
                                    th { "Total Value" }
                                    th { "Status" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for line in lines.iter().cloned() {
                                    InventoryRow {
                                        key: "{line.id}",
                                        line,
                                        cost_edit,
                                        saving: saving(),
                                        on_save: {
                                            let mut save_cost = save_cost.clone();
                                            move |_| save_cost()
                                        },
                                    }
                                }
                            }
                        }
                    }
                },
            }

            div {
                class: "stat-grid stat-grid-3",
                StatCard { title: "Total Items", value: item_count }
                StatCard { title: "Total Inventory Value", value: total_value }
                StatCard { title: "Low Stock Items", value: low_stock, tone: "stat-card-warn" }
            }
        }
    }
}

#[component]
fn InventoryRow(
    line: InventoryLine,
    cost_edit: Signal<InlineEdit<String, String>>,
    saving: bool,
    on_save: EventHandler<()>,
) -> Element {
    let mut cost_edit = cost_edit;
    let status = StockStatus::for_quantity(line.quantity);
    let editing = cost_edit.read().is_editing(&line.sku_id);
    let draft = cost_edit.read().value().cloned().unwrap_or_default();

    rsx! {
        tr {
            td {
                div { class: "cell-title", "{line.product_name}" }
                if let Some(description) = &line.description {
                    div { class: "cell-detail", "{description}" }
                }
            }
            td { class: "mono", "{line.sku_code}" }
            td { {line.category.as_deref().unwrap_or("-")} }
            td { "{line.quantity}" }
            td {
                if editing {
                    div {
                        class: "inline-edit",
                        input {
                            class: "input input-sm",
                            r#type: "number",
                            step: "0.01",
                            min: "0",
                            autofocus: true,
                            value: "{draft}",
                            oninput: move |evt: FormEvent| cost_edit.write().set(evt.value()),
                            onkeydown: move |evt: KeyboardEvent| match evt.key() {
                                Key::Enter => on_save.call(()),
                                Key::Escape => cost_edit.write().cancel(),
                                _ => {}
                            },
                        }
                        button {
                            class: "icon-button icon-button-ok",
                            title: "Save",
                            disabled: saving,
                            onclick: move |_| on_save.call(()),
                            "\u{2713}"
                        }
                        button {
                            class: "icon-button icon-button-cancel",
                            title: "Cancel",
                            onclick: move |_| cost_edit.write().cancel(),
                            "\u{2715}"
                        }
                    }
                } else {
                    span { {format_currency(line.weighted_cost)} }
                    if line.is_manual_cost {
                        Badge { class: "badge badge-blue", "Manual" }
                    }
                }
            }
            td { {format_currency(line.total_value)} }
            td {
                Badge { class: status.badge_class(), "{status.label()}" }
            }
            td {
                class: "row-actions",
                if !editing {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: {
                            let sku_id = line.sku_id.clone();
                            let cost = line.weighted_cost;
                            move |_| cost_edit.write().begin(sku_id.clone(), format!("{cost:.2}"))
                        },
                        "Edit Cost"
                    }
                }
            }
        }
    }
}

/// Checkbox dropdown over the categories present in the list.
#[component]
fn CategoryFilter(options: Vec<String>, selected: Signal<MultiSelect>) -> Element {
    let mut selected = selected;
    let mut open = use_signal(|| false);
    let summary = selected.read().summary("All Categories");

    rsx! {
        div {
            class: "multi-select",
            button {
                class: "input select multi-select-toggle",
                onclick: move |_| open.set(!open()),
                "{summary}"
            }
            if open() {
                div {
                    class: "multi-select-panel",
                    if options.is_empty() {
                        p { class: "cell-detail", "No categories" }
                    }
                    for option in options {
                        Checkbox {
                            key: "{option}",
                            checked: selected.read().contains(&option),
                            onchange: {
                                let option = option.clone();
                                move |_| selected.write().toggle(&option)
                            },
                            "{option}"
                        }
                    }
                    if !selected.read().is_empty() {
                        button {
                            class: "multi-select-clear",
                            onclick: move |_| selected.write().clear(),
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}
