//! Client settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL of the projects service when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for [`ProjdeskClient`](crate::ProjdeskClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host, and port of the projects service.
    pub base_url: String,

    /// Per-request timeout in seconds. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Creates settings for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Returns the per-request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
