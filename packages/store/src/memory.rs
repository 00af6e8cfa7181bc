use std::sync::{Arc, Mutex};

use crate::token::{non_empty, TokenStore};

/// In-memory TokenStore for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        let guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        non_empty(guard.clone())
    }

    fn save(&self, token: &str) {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.to_string());
    }

    fn clear(&self) {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());
        assert!(!store.has_token());

        store.save("abc.def.ghi");
        assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));
        assert!(store.has_token());

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = MemoryTokenStore::with_token("   ");
        assert!(!store.has_token());
    }

    #[test]
    fn test_clones_share_storage() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.save("t1");
        assert_eq!(other.load().as_deref(), Some("t1"));
        other.clear();
        assert!(!store.has_token());
    }
}
