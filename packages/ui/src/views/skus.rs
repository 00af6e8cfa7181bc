use api::{Sku, SkuListParams};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{
    Badge, Button, ButtonVariant, Checkbox, EmptyState, ErrorBanner, Input, Label, Select, Spinner,
    Textarea,
};
use crate::filters::sku_categories;
use crate::forms::SkuForm;
use crate::query::{use_mutator, use_query, QueryKey, ON_SKU_CHANGE, SKUS};

use super::ModalOverlay;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Debug, Clone, PartialEq)]
enum SkuDialog {
    Create,
    Edit(String),
}

/// SKU catalog: search, category filter, create, edit and (de)activate.
#[component]
pub fn SkusView() -> Element {
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut include_deactivated = use_signal(|| false);

    let mut dialog = use_signal(|| Option::<SkuDialog>::None);
    let mut sku_form = use_signal(SkuForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut row_error = use_signal(|| Option::<String>::None);

    let params = use_memo(move || SkuListParams {
        include_deactivated: include_deactivated(),
        category: category(),
        search: search().trim().to_string(),
        ..Default::default()
    });
    let mut skus = use_query(
        move || QueryKey::new(SKUS).with(&params()),
        move |api| {
            let params = params();
            async move { api.list_skus(&params).await }
        },
    );

    let api = use_api();
    let mutator = use_mutator();

    let mut open_create = move || {
        sku_form.set(SkuForm::default());
        form_error.set(None);
        dialog.set(Some(SkuDialog::Create));
    };
    let mut close_dialog = move || {
        dialog.set(None);
        form_error.set(None);
    };

    let submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(mode) = dialog() else { return };
            let api = api.clone();
            let current = sku_form();
            spawn(async move {
                saving.set(true);
                let result = match mode {
                    SkuDialog::Create => match current.to_create() {
                        Some(req) => {
                            mutator
                                .run(ON_SKU_CHANGE, async move { api.create_sku(&req).await })
                                .await
                        }
                        None => Err("SKU code and product name are required".to_string()),
                    },
                    SkuDialog::Edit(id) => match current.to_update() {
                        Some(req) => {
                            mutator
                                .run(ON_SKU_CHANGE, async move { api.update_sku(&id, &req).await })
                                .await
                        }
                        None => Err("Product name is required".to_string()),
                    },
                };
                match result {
                    Ok(()) => {
                        tracing::info!("Saved SKU {}", current.sku_code.trim());
                        close_dialog();
                    }
                    Err(message) => form_error.set(Some(message)),
                }
                saving.set(false);
            });
        }
    };

    let list: Vec<Sku> = match &*skus.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let mut categories = sku_categories(&list);
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
                    h1 { class: "page-title", "SKUs" }
                    p { class: "page-subtitle", "Manage your product catalog" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| open_create(),
                    "Add New SKU"
                }
            }

            div {
                class: "filter-bar",
                Input {
                    class: "filter-search",
                    placeholder: "Search by code, name or description...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                Select {
                    value: category(),
                    options: category_options,
                    onchange: move |evt: FormEvent| category.set(evt.value()),
                }
                Checkbox {
                    checked: include_deactivated(),
                    onchange: move |checked| include_deactivated.set(checked),
                    "Show deactivated"
                }
            }

            if let Some(message) = row_error() {
                ErrorBanner { message }
            }

            match &*skus.read() {
                None => rsx! { Spinner { label: "Loading SKUs..." } },
                Some(Err(e)) => rsx! {
                    ErrorBanner {
                        message: e.to_string(),
                        on_retry: move |_| skus.restart(),
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { message: "No SKUs found" } },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "table-wrap",
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "SKU Code" }
                                    th { "Product" }
                                    th { "Category" }
                                    th { "Supplier" }
                                    th { "Barcode" }
                                    th { "Status" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for sku in list.iter().cloned() {
                                    tr {
                                        key: "{sku.id}",
                                        class: if !sku.is_active { "row-muted" },
                                        td { class: "mono", "{sku.sku_code}" }
                                        td {
                                            div { class: "cell-title", "{sku.product_name}" }
                                            if let Some(description) = &sku.description {
                                                div { class: "cell-detail", "{description}" }
                                            }
                                        }
                                        td { {sku.category.as_deref().unwrap_or("-")} }
                                        td { {sku.supplier.as_deref().unwrap_or("-")} }
                                        td { {sku.barcode.as_deref().unwrap_or("-")} }
                                        td {
                                            if sku.is_active {
                                                Badge { class: "badge badge-green", "Active" }
                                            } else {
                                                Badge { class: "badge badge-gray", "Inactive" }
                                            }
                                        }
                                        td {
                                            class: "row-actions",
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                onclick: {
                                                    let sku = sku.clone();
                                                    move |_| {
                                                        sku_form.set(SkuForm::from_sku(&sku));
                                                        form_error.set(None);
                                                        dialog.set(Some(SkuDialog::Edit(sku.id.clone())));
                                                    }
                                                },
                                                "Edit"
                                            }
                                            Button {
                                                variant: if sku.is_active { ButtonVariant::Destructive } else { ButtonVariant::Secondary },
                                                onclick: {
                                                    let api = api.clone();
                                                    let id = sku.id.clone();
                                                    let activate = !sku.is_active;
                                                    move |_| {
                                                        let api = api.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            row_error.set(None);
                                                            let result = mutator
                                                                .run(ON_SKU_CHANGE, async move {
                                                                    api.set_sku_status(&id, activate).await
                                                                })
                                                                .await;
                                                            if let Err(message) = result {
                                                                row_error.set(Some(message));
                                                            }
                                                        });
                                                    }
                                                },
                                                if sku.is_active { "Deactivate" } else { "Activate" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }

        if let Some(mode) = dialog() {
            ModalOverlay {
                title: if mode == SkuDialog::Create { "Add New SKU" } else { "Edit SKU" },
                on_close: move |_| close_dialog(),
                form {
                    onsubmit: submit,
                    if let Some(message) = form_error() {
                        ErrorBanner { message }
                    }
                    SkuFields { form: sku_form, editing: mode != SkuDialog::Create }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| close_dialog(),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else if mode == SkuDialog::Create { "Create SKU" } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkuFields(form: Signal<SkuForm>, editing: bool) -> Element {
    let mut form = form;
    let current = form();

    rsx! {
        div {
            class: "form-grid",
            div {
                class: "form-field",
                Label { html_for: "sku-code", "SKU Code *" }
                Input {
                    id: "sku-code",
                    placeholder: "ELEC-001",
                    disabled: editing,
                    value: current.sku_code.clone(),
                    oninput: move |evt: FormEvent| form.write().sku_code = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "sku-name", "Product Name *" }
                Input {
                    id: "sku-name",
                    value: current.product_name.clone(),
                    oninput: move |evt: FormEvent| form.write().product_name = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "sku-category", "Category" }
                Input {
                    id: "sku-category",
                    placeholder: "Electronics",
                    value: current.category.clone(),
                    oninput: move |evt: FormEvent| form.write().category = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "sku-supplier", "Supplier" }
                Input {
                    id: "sku-supplier",
                    value: current.supplier.clone(),
                    oninput: move |evt: FormEvent| form.write().supplier = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "sku-barcode", "Barcode" }
                Input {
                    id: "sku-barcode",
                    value: current.barcode.clone(),
                    oninput: move |evt: FormEvent| form.write().barcode = evt.value(),
                }
            }
        }
        div {
            class: "form-field",
            Label { html_for: "sku-description", "Description" }
            Textarea {
                id: "sku-description",
                value: current.description.clone(),
                oninput: move |evt: FormEvent| form.write().description = evt.value(),
            }
        }
    }
}
