//! Authentication context and hooks for the UI.
//!
//! The bearer token is persisted through a [`store::TokenStore`]. Holding a
//! token is what lets a protected route render; the user and organization
//! arrive once `/auth/me` answers on startup, or straight from the login
//! response.

use std::time::Duration;

use api::{ApiClient, ApiError, LoginResponse, Organization, Session, User};
use dioxus::prelude::*;
use store::{ConsoleConfig, TokenStore};

use crate::query::{use_query_client, QueryClient};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Token loaded from storage or returned by login.
    pub token: Option<String>,
    /// True while a stored token is being checked against `/auth/me`.
    pub loading: bool,
    /// Whether the server answered the last health check.
    pub online: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            token: None,
            loading: false,
            online: true,
        }
    }
}

impl AuthState {
    /// Initial state: restoring if a token survived the last visit.
    pub fn from_store(store: &dyn TokenStore) -> Self {
        let token = store.load();
        Self {
            loading: token.is_some(),
            token,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn organization(&self) -> Option<&Organization> {
        self.session.as_ref().map(|s| &s.organization)
    }

    pub fn login_success(&mut self, resp: LoginResponse, store: &dyn TokenStore) {
        store.save(&resp.token);
        self.token = Some(resp.token.clone());
        self.session = Some(Session::from(resp));
        self.loading = false;
        self.online = true;
    }

    /// `/auth/me` answered; its response carries no token, so the held one is kept.
    pub fn restored(&mut self, resp: LoginResponse) {
        if let Some(token) = self.token.clone() {
            self.session = Some(Session {
                user: resp.user,
                organization: resp.organization,
                token,
            });
        }
        self.loading = false;
        self.online = true;
    }

    /// A rejected token is discarded. Any other failure keeps it so the
    /// session can be restored once the server is back.
    pub fn restore_failed(&mut self, err: &ApiError, store: &dyn TokenStore) {
        if err.is_auth_failure() {
            self.logout(store);
        } else {
            self.loading = false;
            self.online = false;
        }
    }

    pub fn logout(&mut self, store: &dyn TokenStore) {
        store.clear();
        self.session = None;
        self.token = None;
        self.loading = false;
    }

    /// A client carrying whatever credentials are currently held.
    pub fn client(&self, base_url: &str) -> ApiClient {
        let client = ApiClient::new(base_url);
        match (&self.session, &self.token) {
            (Some(session), _) => client.with_session(session),
            (None, Some(token)) => client.with_token(token.clone()),
            (None, None) => client,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates on login, logout and session restore.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_config() -> ConsoleConfig {
    use_context::<ConsoleConfig>()
}

/// A client for the current session.
pub fn use_api() -> ApiClient {
    let base_url = use_config().api.base_url;
    let auth = use_auth();
    auth().client(&base_url)
}

/// Checks the held token against `/auth/me`.
pub async fn restore_session(mut auth: Signal<AuthState>, base_url: &str) {
    let client = auth.peek().client(base_url);
    if client.token().is_none() {
        if auth.peek().loading {
            auth.write().loading = false;
        }
        return;
    }
    match client.me().await {
        Ok(resp) => {
            tracing::info!("Session restored for {}", resp.user.email);
            auth.write().restored(resp);
        }
        Err(e) => {
            tracing::warn!("Session restore failed: {e}");
            auth.write()
                .restore_failed(&e, &store::default_token_store());
        }
    }
}

/// Signs in and stores the token. Cached data from a previous session is dropped.
pub async fn login(
    mut auth: Signal<AuthState>,
    queries: QueryClient,
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let resp = ApiClient::new(base_url).login(email, password).await?;
    queries.clear();
    auth.write()
        .login_success(resp, &store::default_token_store());
    Ok(())
}

pub fn logout(mut auth: Signal<AuthState>, queries: QueryClient) {
    tracing::info!("Signing out");
    queries.clear();
    auth.write().logout(&store::default_token_store());
}

/// Ends the session when the server rejected the token mid-session.
pub fn end_session_if_unauthorized(mut auth: Signal<AuthState>, err: &ApiError) {
    if *err == ApiError::Unauthorized && auth.peek().token.is_some() {
        tracing::warn!("Token rejected, signing out");
        auth.write().logout(&store::default_token_store());
    }
}

async fn sleep_secs(secs: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(Duration::from_secs(secs)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(Duration::from_secs(secs)).await;
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ConsoleConfig, children: Element) -> Element {
    let config = use_context_provider(|| config);
    let auth = use_context_provider(|| {
        Signal::new(AuthState::from_store(&store::default_token_store()))
    });
    use_context_provider(|| QueryClient::new(config.query.stale_secs));

    // Restore a stored session on mount
    let restore_url = config.api.base_url.clone();
    let _ = use_resource(move || {
        let base_url = restore_url.clone();
        async move { restore_session(auth, &base_url).await }
    });

    // Periodic connectivity check
    let poll_url = config.api.base_url.clone();
    let interval = u64::from(config.session.health_check_secs);
    use_effect(move || {
        if interval == 0 {
            return;
        }
        let base_url = poll_url.clone();
        let mut auth = auth;
        spawn(async move {
            loop {
                sleep_secs(interval).await;

                let online = match ApiClient::new(&base_url).health().await {
                    Ok(status) => status.is_ok(),
                    Err(_) => false,
                };
                let (was_online, unrestored) = {
                    let state = auth.peek();
                    (
                        state.online,
                        state.token.is_some() && state.session.is_none() && !state.loading,
                    )
                };
                if was_online != online {
                    tracing::info!("API is {}", if online { "reachable" } else { "unreachable" });
                    auth.write().online = online;
                }
                if online && unrestored {
                    restore_session(auth, &base_url).await;
                }
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let queries = use_query_client();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| logout(auth, queries),
            "{label}"
        }
    }
}
