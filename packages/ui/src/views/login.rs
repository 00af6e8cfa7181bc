//! Email and password sign-in.

use dioxus::prelude::*;

use crate::auth::{login, use_auth, use_config};
use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label};
use crate::query::use_query_client;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Login form. `on_success` fires once the token is stored.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let auth = use_auth();
    let queries = use_query_client();
    let base_url = use_config().api.base_url;

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        let base_url = base_url.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);
            match login(auth, queries, &base_url, &email(), &password()).await {
                Ok(()) => {
                    tracing::info!("Signed in as {}", email().trim());
                    password.set(String::new());
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "login-page",
            form {
                class: "login-card",
                onsubmit: onsubmit,
                h1 { class: "login-title", "Flex ERP" }
                p { class: "page-subtitle", "Sign in to your organization" }

                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                div {
                    class: "form-field",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "you@company.com",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    class: "w-full",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
