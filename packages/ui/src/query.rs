//! Client-side query cache shared by every page.
//!
//! Responses are cached per [`QueryKey`] for the configured stale window.
//! A mutation invalidates one or more key roots; pages subscribed to a root
//! refetch when its generation moves.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;

use api::{ApiClient, ApiError};
use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::{end_session_if_unauthorized, use_auth, use_config, AuthState};

pub const SKUS: &str = "skus";
pub const INVENTORY: &str = "inventory";
pub const TRANSACTIONS: &str = "transactions";
pub const TRANSACTION_SUMMARY: &str = "transaction-summary";
pub const USERS: &str = "users";
pub const USER_ROLES: &str = "user-roles";
pub const CHANGE_LOGS: &str = "change-logs";
pub const ACTIVITY_SUMMARY: &str = "activity-summary";
pub const TABLE_FIELDS: &str = "table-fields";

/// Roots refreshed after creating, editing or (de)activating a SKU.
pub const ON_SKU_CHANGE: &[&str] = &[SKUS];
/// Roots refreshed after a manual weighted-cost override.
pub const ON_COST_CHANGE: &[&str] = &[INVENTORY];
/// A stock movement changes the ledger, its totals and the stock levels.
pub const ON_TRANSACTION: &[&str] = &[TRANSACTIONS, TRANSACTION_SUMMARY, INVENTORY];
pub const ON_USER_CHANGE: &[&str] = &[USERS];
pub const ON_FIELD_ALIAS_CHANGE: &[&str] = &[TABLE_FIELDS];

/// Cache key: a resource root plus the parameters that shaped the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub root: &'static str,
    pub params: String,
}

impl QueryKey {
    pub fn new(root: &'static str) -> Self {
        Self {
            root,
            params: String::new(),
        }
    }

    /// Keys the query on the debug rendering of its parameters.
    pub fn with(mut self, params: &impl Debug) -> Self {
        self.params = format!("{params:?}");
        self
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    fetched_at: DateTime<Utc>,
}

/// Time-bounded response cache, stored as JSON so any model fits.
#[derive(Debug, Clone)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    stale_after: Duration,
}

impl QueryCache {
    pub fn new(stale_secs: u32) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after: Duration::seconds(i64::from(stale_secs)),
        }
    }

    /// The cached value, unless it is older than the stale window.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey, now: DateTime<Utc>) -> Option<T> {
        let entry = self.entries.get(key)?;
        if now.signed_duration_since(entry.fetched_at) >= self.stale_after {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn insert<T: Serialize>(&mut self, key: QueryKey, value: &T, now: DateTime<Utc>) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(
                    key,
                    CacheEntry {
                        value,
                        fetched_at: now,
                    },
                );
            }
            Err(e) => tracing::warn!("Not caching {}: {e}", key.root),
        }
    }

    /// Drops every entry under `root`, whatever its parameters.
    pub fn invalidate(&mut self, root: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.root != root);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Handle to the shared cache, provided by [`AuthProvider`](crate::AuthProvider).
#[derive(Clone, Copy, PartialEq)]
pub struct QueryClient {
    cache: Signal<QueryCache>,
    generations: Signal<HashMap<&'static str, u64>>,
}

impl QueryClient {
    /// Must be called inside a component scope.
    pub fn new(stale_secs: u32) -> Self {
        Self {
            cache: Signal::new(QueryCache::new(stale_secs)),
            generations: Signal::new(HashMap::new()),
        }
    }

    /// Current generation of `root`. Reading it subscribes the caller.
    pub fn generation(&self, root: &str) -> u64 {
        self.generations.read().get(root).copied().unwrap_or(0)
    }

    pub fn cached<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.cache.peek().get(key, Utc::now())
    }

    pub fn store<T: Serialize>(mut self, key: &QueryKey, value: &T) {
        self.cache.write().insert(key.clone(), value, Utc::now());
    }

    pub fn invalidate(mut self, roots: &[&'static str]) {
        for root in roots {
            let dropped = self.cache.write().invalidate(root);
            *self.generations.write().entry(*root).or_insert(0) += 1;
            tracing::debug!("Invalidated {root} ({dropped} cached)");
        }
    }

    pub fn clear(mut self) {
        self.cache.write().clear();
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

/// Fetches through the cache. The resource reruns when `key` changes or its
/// root is invalidated; a rejected token ends the session.
pub fn use_query<T, K, F, Fut>(key: K, fetch: F) -> Resource<Result<T, ApiError>>
where
    T: Serialize + DeserializeOwned + 'static,
    K: Fn() -> QueryKey + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let client = use_query_client();
    let auth = use_auth();
    let base_url = use_config().api.base_url;

    use_resource(move || {
        let key = key();
        let generation = client.generation(key.root);
        let api = auth.read().client(&base_url);
        let request = fetch(api);
        async move {
            if let Some(hit) = client.cached::<T>(&key) {
                return Ok(hit);
            }
            tracing::debug!("Fetching {} (generation {generation})", key.root);
            let result = request.await;
            match &result {
                Ok(value) => client.store(&key, value),
                Err(err) => end_session_if_unauthorized(auth, err),
            }
            result
        }
    })
}

/// Runs mutations and refreshes the queries they affect.
#[derive(Clone, Copy)]
pub struct Mutator {
    client: QueryClient,
    auth: Signal<AuthState>,
}

pub fn use_mutator() -> Mutator {
    Mutator {
        client: use_query_client(),
        auth: use_auth(),
    }
}

impl Mutator {
    /// Awaits `mutation`; on success invalidates `roots`, on failure returns
    /// the message to show in the dialog.
    pub async fn run<F>(self, roots: &[&'static str], mutation: F) -> Result<(), String>
    where
        F: Future<Output = Result<(), ApiError>>,
    {
        match mutation.await {
            Ok(()) => {
                self.client.invalidate(roots);
                Ok(())
            }
            Err(err) => {
                end_session_if_unauthorized(self.auth, &err);
                Err(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::InventoryListParams;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_entries_go_stale() {
        let mut cache = QueryCache::new(300);
        let key = QueryKey::new(SKUS);
        cache.insert(key.clone(), &vec!["ELEC-001".to_string()], at(0));

        let hit: Option<Vec<String>> = cache.get(&key, at(299));
        assert_eq!(hit, Some(vec!["ELEC-001".to_string()]));
        assert_eq!(cache.get::<Vec<String>>(&key, at(300)), None);
    }

    #[test]
    fn test_params_are_part_of_the_key() {
        let mut cache = QueryCache::new(300);
        let first = QueryKey::new(INVENTORY).with(&InventoryListParams::default());
        let second = QueryKey::new(INVENTORY).with(&InventoryListParams {
            search: "desk".into(),
            ..Default::default()
        });
        cache.insert(first.clone(), &1u32, at(0));

        assert_eq!(cache.get::<u32>(&first, at(1)), Some(1));
        assert_eq!(cache.get::<u32>(&second, at(1)), None);
    }

    #[test]
    fn test_invalidate_drops_only_its_root() {
        let mut cache = QueryCache::new(300);
        cache.insert(QueryKey::new(SKUS), &1u32, at(0));
        cache.insert(QueryKey::new(INVENTORY), &2u32, at(0));
        cache.insert(QueryKey::new(INVENTORY).with(&"page 2"), &3u32, at(0));

        for root in ON_COST_CHANGE {
            cache.invalidate(root);
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get::<u32>(&QueryKey::new(SKUS), at(1)), Some(1));
    }

    #[test]
    fn test_transaction_refreshes_stock() {
        let mut cache = QueryCache::new(300);
        for root in [TRANSACTIONS, TRANSACTION_SUMMARY, INVENTORY, SKUS] {
            cache.insert(QueryKey::new(root), &0u32, at(0));
        }
        let dropped: usize = ON_TRANSACTION.iter().map(|root| cache.invalidate(root)).sum();
        assert_eq!(dropped, 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_shape_mismatch_is_a_miss() {
        let mut cache = QueryCache::new(300);
        let key = QueryKey::new(USERS);
        cache.insert(key.clone(), &"not a list", at(0));
        assert_eq!(cache.get::<Vec<u32>>(&key, at(1)), None);

        cache.clear();
        assert!(cache.is_empty());
    }
}
