//! Client configuration.
//!
//! Only `base_url` has no default. The API root and the request timeout are
//! fixed by the backend contract but can be overridden for tests or for a
//! backend mounted elsewhere.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_API_ROOT: &str = "/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    base_url: String,
    #[serde(default = "default_api_root")]
    api_root: String,
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
}

fn default_api_root() -> String {
    DEFAULT_API_ROOT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_root: default_api_root(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_api_root(mut self, api_root: &str) -> Self {
        self.api_root = api_root.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Base URL and API root joined, without a trailing slash.
    pub fn api_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let root = self.api_root.trim_matches('/');
        if root.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{root}")
        }
    }
}
