//! Connection settings for the remote classification service.

use std::time::Duration;

/// Hard deadline for one submission round-trip. Exceeding it cancels the
/// in-flight request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration for the classification service client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,

    /// Per-submission deadline. Tests shrink this to exercise the
    /// timeout path without waiting 25 seconds.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Default configuration with the base URL taken from
    /// `MAILTRIAGE_API_URL` when set.
    pub fn from_env() -> Self {
        let base_url = std::env::var("MAILTRIAGE_API_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
