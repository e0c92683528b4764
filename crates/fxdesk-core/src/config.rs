use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_HISTORY_TAKE: i64 = 5;

/// Root configuration (config.toml).
#[derive(Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RootConfig {
    /// Base URL of the exchange-rate backend, without the `/v1` prefix.
    pub backend_url: String,
    /// Sent verbatim as the `Authorization` header when non-empty.
    pub access_token: Option<String>,
    /// Quiet period after the last form edit before a conversion is issued.
    pub debounce_ms: u64,
    /// Number of past conversions shown by the history view.
    pub history_take: i64,
}

impl RootConfig {
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Returns the access token only when it is set and non-empty.
    pub fn credential(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            access_token: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            history_take: DEFAULT_HISTORY_TAKE,
        }
    }
}

// Keeps the access token out of logs.
impl std::fmt::Debug for RootConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootConfig")
            .field("backend_url", &self.backend_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("debounce_ms", &self.debounce_ms)
            .field("history_take", &self.history_take)
            .finish()
    }
}
