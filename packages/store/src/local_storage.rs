//! # `localStorage` token store: browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the **web platform**.
//! It keeps the bearer token under [`TOKEN_KEY`] in `window.localStorage` so a
//! reload does not sign the user out.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled cookies). All methods
//! swallow those errors: reads return `None` and writes are dropped with a
//! warning, which degrades to "signed out" instead of crashing the console.

use web_sys::Storage;

use crate::token::{non_empty, TokenStore, TOKEN_KEY};

/// `window.localStorage`-backed TokenStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        non_empty(storage.get_item(TOKEN_KEY).ok().flatten())
    }

    fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, token not persisted");
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            tracing::warn!("Failed to persist token");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
