//! Persistence of the bearer token across page loads.
//!
//! Only the raw token string is kept; the user and organization are fetched
//! again from the API when a stored token is restored.

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "auth_token";

/// Synchronous token storage.
///
/// Implementations are cheap handles; cloning one yields another view of the
/// same underlying storage.
pub trait TokenStore {
    /// Stored token, or `None` when absent or empty.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);

    /// The guard check run before every protected navigation.
    fn has_token(&self) -> bool {
        self.load().is_some()
    }
}

/// Treats empty or whitespace-only tokens as absent.
pub(crate) fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}
