//! # Console configuration: `flex-erp.toml`
//!
//! Defines the TOML file the web build embeds to learn where the REST API lives
//! and how the client-side caches behave
//! (filename: [`ConsoleConfig::filename`] = `"flex-erp.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [query]
//! stale_secs = 300          # cached query results older than this are refetched
//!
//! [session]
//! health_check_secs = 30    # 0 disables the API reachability poll
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ConsoleConfig`] | Top-level config. Builder helpers, TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | REST API origin. |
//! | [`QueryConfig`] | Staleness window of the query cache, default **300 seconds**. |
//! | [`SessionConfig`] | Interval of the `/health` poll, default **30 seconds**. |
//!
//! Every section derives `Default`, so a missing or empty file equals the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `flex-erp.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the REST API is reachable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Query cache configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Seconds a cached response stays fresh.
    #[serde(default = "default_stale_secs")]
    pub stale_secs: u32,
}

fn default_stale_secs() -> u32 {
    300
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_secs: default_stale_secs(),
        }
    }
}

/// Session upkeep configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Health poll interval in seconds. 0 disables polling.
    #[serde(default = "default_health_check_secs")]
    pub health_check_secs: u32,
}

fn default_health_check_secs() -> u32 {
    30
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            health_check_secs: default_health_check_secs(),
        }
    }
}

impl ConsoleConfig {
    /// Create a config pointing at the given API origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Builder method to set the API origin. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the query staleness window.
    pub fn with_stale_secs(mut self, secs: u32) -> Self {
        self.query.stale_secs = secs;
        self
    }

    /// Builder method to set the health poll interval.
    pub fn with_health_check_secs(mut self, secs: u32) -> Self {
        self.session.health_check_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "flex-erp.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let base_url = config.api.base_url.clone();
        Ok(config.with_base_url(base_url))
    }

    /// Parse from TOML, falling back to defaults when the text is malformed.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {e}", Self::filename());
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
