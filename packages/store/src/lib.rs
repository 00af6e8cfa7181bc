pub mod config;
pub mod token;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageTokenStore;

pub use config::ConsoleConfig;
pub use token::{TokenStore, TOKEN_KEY};

/// Platform token store: `localStorage` in the browser, memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn default_token_store() -> LocalStorageTokenStore {
    LocalStorageTokenStore::new()
}

/// Platform token store: `localStorage` in the browser, memory elsewhere.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn default_token_store() -> MemoryTokenStore {
    use std::sync::OnceLock;

    // One process-wide store so every caller sees the same token.
    static STORE: OnceLock<MemoryTokenStore> = OnceLock::new();
    STORE.get_or_init(MemoryTokenStore::new).clone()
}
