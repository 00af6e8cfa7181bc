use api::{ManagedUser, UpdateUserRequest, UserListParams, UserRole, ROLE_NAMES};
use chrono::Utc;
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth};
use crate::components::{
    Badge, Button, ButtonVariant, Checkbox, EmptyState, ErrorBanner, Input, Label, Select,
    Spinner, StatCard,
};
use crate::filters::{active_user_count, relative_time, role_badge, ActiveFilter};
use crate::forms::UserForm;
use crate::query::{use_mutator, use_query, QueryKey, ON_USER_CHANGE, USERS, USER_ROLES};

use super::{confirm, ModalOverlay};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn title_case(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn delete_prompt(user: &ManagedUser) -> String {
    format!("Delete {}? This cannot be undone.", user.email)
}

#[derive(Debug, Clone, PartialEq)]
enum UserDialog {
    Create,
    Edit(String),
}

/// Organization members: filters, create, edit, (de)activate and delete.
#[component]
pub fn UsersView() -> Element {
    let auth = use_auth();
    let mut search = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut status = use_signal(ActiveFilter::default);

    let mut dialog = use_signal(|| Option::<UserDialog>::None);
    let mut user_form = use_signal(UserForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut row_error = use_signal(|| Option::<String>::None);

    let params = use_memo(move || UserListParams {
        role: role(),
        is_active: status().as_option(),
        search: search().trim().to_string(),
    });
    let mut users = use_query(
        move || QueryKey::new(USERS).with(&params()),
        move |api| {
            let params = params();
            async move { api.list_users(&params).await }
        },
    );
    let roles = use_query(
        || QueryKey::new(USER_ROLES),
        |api| async move { api.list_roles().await },
    );

    let api = use_api();
    let mutator = use_mutator();
    let current_user_id = auth().user().map(|u| u.id.clone());

    let submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(mode) = dialog() else { return };
            let api = api.clone();
            let current = user_form();
            spawn(async move {
                saving.set(true);
                let result = match mode {
                    UserDialog::Create => match current.to_create() {
                        Ok(req) => {
                            mutator
                                .run(ON_USER_CHANGE, async move { api.create_user(&req).await })
                                .await
                        }
                        Err(message) => Err(message),
                    },
                    UserDialog::Edit(id) => match current.to_update() {
                        Ok(req) => {
                            mutator
                                .run(ON_USER_CHANGE, async move { api.update_user(&id, &req).await })
                                .await
                        }
                        Err(message) => Err(message),
                    },
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        tracing::info!("Saved user {}", current.email.trim());
                        dialog.set(None);
                    }
                    Err(message) => form_error.set(Some(message)),
                }
            });
        }
    };

    let role_list: Vec<UserRole> = match &*roles.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let role_filter_options: Vec<(String, String)> =
        std::iter::once((String::new(), "All Roles".to_string()))
            .chain(ROLE_NAMES.iter().map(|r| (r.to_string(), title_case(r))))
            .collect();
    let status_options: Vec<(String, String)> = ActiveFilter::ALL
        .iter()
        .map(|f| (f.value().to_string(), f.label().to_string()))
        .collect();
    let (total, active) = match &*users.read() {
        Some(Ok(list)) => (list.len().to_string(), active_user_count(list).to_string()),
        _ => ("-".to_string(), "-".to_string()),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Users" }
                    p { class: "page-subtitle", "Manage who can access your organization" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        user_form.set(UserForm::default());
                        form_error.set(None);
                        dialog.set(Some(UserDialog::Create));
                    },
                    "Add User"
                }
            }

            div {
                class: "stat-grid stat-grid-2",
                StatCard { title: "Total Users", value: total }
                StatCard { title: "Active Users", value: active }
            }

            div {
                class: "filter-bar",
                Input {
                    class: "filter-search",
                    placeholder: "Search by name or email...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                Select {
                    value: role(),
                    options: role_filter_options,
                    onchange: move |evt: FormEvent| role.set(evt.value()),
                }
                Select {
                    value: status().value(),
                    options: status_options,
                    onchange: move |evt: FormEvent| status.set(ActiveFilter::from_value(&evt.value())),
                }
            }

            if let Some(message) = row_error() {
                ErrorBanner { message }
            }

            match &*users.read() {
                None => rsx! { Spinner { label: "Loading users..." } },
                Some(Err(e)) => rsx! {
                    ErrorBanner {
                        message: e.to_string(),
                        on_retry: move |_| users.restart(),
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { message: "No users found" } },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "table-wrap",
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "User" }
                                    th { "Role" }
                                    th { "Status" }
                                    th { "Last Login" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for user in list.iter().cloned() {
                                    UserRow {
                                        key: "{user.id}",
                                        is_self: current_user_id.as_deref() == Some(user.id.as_str()),
                                        on_edit: {
                                            let user = user.clone();
                                            move |_| {
                                                user_form.set(UserForm::from_user(&user));
                                                form_error.set(None);
                                                dialog.set(Some(UserDialog::Edit(user.id.clone())));
                                            }
                                        },
                                        on_toggle: {
                                            let api = api.clone();
                                            let user = user.clone();
                                            move |_| {
                                                let api = api.clone();
                                                let id = user.id.clone();
                                                let req = UpdateUserRequest::toggle_active(&user);
                                                spawn(async move {
                                                    row_error.set(None);
                                                    let result = mutator
                                                        .run(ON_USER_CHANGE, async move { api.update_user(&id, &req).await })
                                                        .await;
                                                    if let Err(message) = result {
                                                        row_error.set(Some(message));
                                                    }
                                                });
                                            }
                                        },
                                        on_delete: {
                                            let api = api.clone();
                                            let user = user.clone();
                                            move |_| {
                                                if !confirm(&delete_prompt(&user)) {
                                                    return;
                                                }
                                                let api = api.clone();
                                                let id = user.id.clone();
                                                let target = id.clone();
                                                spawn(async move {
                                                    row_error.set(None);
                                                    let result = mutator
                                                        .run(ON_USER_CHANGE, async move { api.delete_user(&target).await })
                                                        .await;
                                                    match result {
                                                        Ok(()) => tracing::info!("Deleted user {id}"),
                                                        Err(message) => row_error.set(Some(message)),
                                                    }
                                                });
                                            }
                                        },
                                        user,
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
                title: if mode == UserDialog::Create { "Add User" } else { "Edit User" },
                on_close: move |_| dialog.set(None),
                form {
                    onsubmit: submit,
                    if let Some(message) = form_error() {
                        ErrorBanner { message }
                    }
                    UserFields { form: user_form, roles: role_list, editing: mode != UserDialog::Create }
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
                            if saving() { "Saving..." } else if mode == UserDialog::Create { "Create User" } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(
    user: ManagedUser,
    is_self: bool,
    on_edit: EventHandler<()>,
    on_toggle: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let last_login = user
        .last_login_at
        .map(|at| relative_time(at, Utc::now()))
        .unwrap_or_else(|| "Never".to_string());

    rsx! {
        tr {
            class: if !user.is_active { "row-muted" },
            td {
                div { class: "cell-title", "{user.name}" }
                div { class: "cell-detail", "{user.email}" }
            }
            td {
                Badge { class: role_badge(&user.role), {title_case(&user.role)} }
            }
            td {
                if user.is_active {
                    Badge { class: "badge badge-green", "Active" }
                } else {
                    Badge { class: "badge badge-gray", "Inactive" }
                }
            }
            td { "{last_login}" }
            td {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_edit.call(()),
                    "Edit"
                }
                if !is_self {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_toggle.call(()),
                        if user.is_active { "Deactivate" } else { "Activate" }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_delete.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn UserFields(form: Signal<UserForm>, roles: Vec<UserRole>, editing: bool) -> Element {
    let mut form = form;
    let current = form();
    let role_options: Vec<(String, String)> = ROLE_NAMES
        .iter()
        .map(|r| (r.to_string(), title_case(r)))
        .collect();
    let description = roles
        .iter()
        .find(|r| r.name == current.role)
        .map(|r| r.description.clone())
        .filter(|d| !d.is_empty());

    rsx! {
        div {
            class: "form-field",
            Label { html_for: "user-email", "Email *" }
            Input {
                id: "user-email",
                r#type: "email",
                placeholder: "name@company.com",
                disabled: editing,
                value: current.email.clone(),
                oninput: move |evt: FormEvent| form.write().email = evt.value(),
            }
        }
        div {
            class: "form-field",
            Label { html_for: "user-name", "Name *" }
            Input {
                id: "user-name",
                value: current.name.clone(),
                oninput: move |evt: FormEvent| form.write().name = evt.value(),
            }
        }
        div {
            class: "form-field",
            Label { html_for: "user-role", "Role *" }
            Select {
                id: "user-role",
                value: current.role.clone(),
                options: role_options,
                onchange: move |evt: FormEvent| form.write().role = evt.value(),
            }
            if let Some(description) = description {
                p { class: "form-hint", "{description}" }
            }
        }
        if editing {
            Checkbox {
                id: "user-active",
                checked: current.is_active,
                onchange: move |checked| form.write().is_active = checked,
                "Active"
            }
        }
    }
}
