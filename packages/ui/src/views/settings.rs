use api::{table_label, FieldAlias, TableFields, SUPPORTED_TABLES};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::components::{
    Badge, Button, ButtonVariant, Checkbox, EmptyState, ErrorBanner, Input, Label, Spinner,
    StatCard, Textarea,
};
use crate::filters::format_timestamp;
use crate::forms::FieldAliasForm;
use crate::query::{use_mutator, use_query, QueryKey, ON_FIELD_ALIAS_CHANGE, TABLE_FIELDS};

use super::ModalOverlay;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Debug, Clone, PartialEq)]
enum AliasDialog {
    Create,
    Edit(String),
}

/// Per-organization field labels for each supported table.
#[component]
pub fn SettingsView() -> Element {
    let mut table = use_signal(|| SUPPORTED_TABLES[0].0.to_string());
    let mut dialog = use_signal(|| Option::<AliasDialog>::None);
    let mut alias_form = use_signal(FieldAliasForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut page_error = use_signal(|| Option::<String>::None);
    let mut initializing = use_signal(|| false);

    let mut fields = use_query(
        move || QueryKey::new(TABLE_FIELDS).with(&table()),
        move |api| {
            let table = table();
            async move { api.table_fields(&table).await }
        },
    );

    let api = use_api();
    let mutator = use_mutator();

    let initialize = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let table = table();
            spawn(async move {
                initializing.set(true);
                page_error.set(None);
                let result = mutator
                    .run(ON_FIELD_ALIAS_CHANGE, async {
                        api.initialize_table_fields(&table).await
                    })
                    .await;
                match result {
                    Ok(()) => tracing::info!("Initialized fields of {table}"),
                    Err(message) => page_error.set(Some(message)),
                }
                initializing.set(false);
            });
        }
    };

    let submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(mode) = dialog() else { return };
            let api = api.clone();
            let current = alias_form();
            let table = table();
            spawn(async move {
                saving.set(true);
                let result = match mode {
                    AliasDialog::Create => match current.to_create(&table) {
                        Ok(req) => {
                            mutator
                                .run(ON_FIELD_ALIAS_CHANGE, async move {
                                    api.create_field_alias(&req).await
                                })
                                .await
                        }
                        Err(message) => Err(message),
                    },
                    AliasDialog::Edit(id) => match current.to_update() {
                        Ok(req) => {
                            mutator
                                .run(ON_FIELD_ALIAS_CHANGE, async move {
                                    api.update_field_alias(&id, &req).await
                                })
                                .await
                        }
                        Err(message) => Err(message),
                    },
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        tracing::info!("Saved alias for {table}.{}", current.field_name.trim());
                        dialog.set(None);
                    }
                    Err(message) => form_error.set(Some(message)),
                }
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Settings" }
                    p { class: "page-subtitle", "Rename and hide columns for your organization" }
                }
                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: initializing(),
                        onclick: initialize,
                        if initializing() { "Initializing..." } else { "Initialize Fields" }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            alias_form.set(FieldAliasForm::default());
                            form_error.set(None);
                            dialog.set(Some(AliasDialog::Create));
                        },
                        "Add Field Alias"
                    }
                }
            }

            div {
                class: "tab-bar",
                for (name, label) in SUPPORTED_TABLES {
                    button {
                        key: "{name}",
                        class: if table() == name { "tab active" } else { "tab" },
                        onclick: move |_| {
                            table.set(name.to_string());
                            page_error.set(None);
                        },
                        "{label}"
                    }
                }
            }

            if let Some(message) = page_error() {
                ErrorBanner { message }
            }

            match &*fields.read() {
                None => rsx! { Spinner { label: "Loading fields..." } },
                Some(Err(e)) => rsx! {
                    ErrorBanner {
                        message: e.to_string(),
                        on_retry: move |_| fields.restart(),
                    }
                },
                Some(Ok(table_fields)) => rsx! {
                    FieldTable {
                        table_fields: table_fields.clone(),
                        on_edit: move |alias: FieldAlias| {
                            alias_form.set(FieldAliasForm::from_alias(&alias));
                            form_error.set(None);
                            dialog.set(Some(AliasDialog::Edit(alias.id.clone())));
                        },
                    }
                },
            }
        }

        if let Some(mode) = dialog() {
            ModalOverlay {
                title: if mode == AliasDialog::Create {
                    format!("Add Field Alias: {}", table_label(&table()))
                } else {
                    "Edit Field Alias".to_string()
                },
                on_close: move |_| dialog.set(None),
                form {
                    onsubmit: submit,
                    if let Some(message) = form_error() {
                        ErrorBanner { message }
                    }
                    AliasFields { form: alias_form, editing: mode != AliasDialog::Create }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| dialog.set(None),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldTable(table_fields: TableFields, on_edit: EventHandler<FieldAlias>) -> Element {
    let rows = table_fields.sorted_fields();
    let metadata = table_fields.metadata.clone().unwrap_or_default();
    let last_updated = metadata
        .last_updated
        .map(format_timestamp)
        .unwrap_or_else(|| "Never".to_string());

    rsx! {
        div {
            class: "stat-grid",
            StatCard { title: "Total Fields", value: metadata.total_fields.to_string() }
            StatCard { title: "Hidden Fields", value: metadata.hidden_fields.to_string() }
            StatCard { title: "Custom Aliases", value: metadata.custom_aliases.to_string() }
            StatCard { title: "Last Updated", value: last_updated }
        }

        if rows.is_empty() {
            EmptyState { message: "No fields configured. Use Initialize Fields to load the defaults." }
        } else {
            div {
                class: "table-wrap",
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Field" }
                            th { "Display Name" }
                            th { "Description" }
                            th { "Visibility" }
                            th { "Order" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for alias in rows {
                            tr {
                                key: "{alias.id}",
                                class: if alias.is_hidden { "row-muted" },
                                td { class: "mono", "{alias.field_name}" }
                                td { class: "cell-title", "{alias.display_name}" }
                                td { {alias.description.as_deref().unwrap_or("-")} }
                                td {
                                    if alias.is_hidden {
                                        Badge { class: "badge badge-gray", "Hidden" }
                                    } else {
                                        Badge { class: "badge badge-green", "Visible" }
                                    }
                                }
                                td { "{alias.sort_order}" }
                                td {
                                    class: "row-actions",
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let alias = alias.clone();
                                            move |_| on_edit.call(alias.clone())
                                        },
                                        "Edit"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AliasFields(form: Signal<FieldAliasForm>, editing: bool) -> Element {
    let mut form = form;
    let current = form();

    rsx! {
        div {
            class: "form-grid",
            div {
                class: "form-field",
                Label { html_for: "alias-field", "Field Name *" }
                Input {
                    id: "alias-field",
                    placeholder: "product_name",
                    disabled: editing,
                    value: current.field_name.clone(),
                    oninput: move |evt: FormEvent| form.write().field_name = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "alias-display", "Display Name *" }
                Input {
                    id: "alias-display",
                    value: current.display_name.clone(),
                    oninput: move |evt: FormEvent| form.write().display_name = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "alias-order", "Sort Order" }
                Input {
                    id: "alias-order",
                    r#type: "number",
                    step: "1",
                    value: current.sort_order.clone(),
                    oninput: move |evt: FormEvent| form.write().sort_order = evt.value(),
                }
            }
        }
        div {
            class: "form-field",
            Label { html_for: "alias-description", "Description" }
            Textarea {
                id: "alias-description",
                rows: 2,
                value: current.description.clone(),
                oninput: move |evt: FormEvent| form.write().description = evt.value(),
            }
        }
        Checkbox {
            id: "alias-hidden",
            checked: current.is_hidden,
            onchange: move |checked| form.write().is_hidden = checked,
            "Hide this field"
        }
    }
}
