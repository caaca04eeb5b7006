//! Upstream API configuration.

use std::{env, time::Duration};

use url::Url;

use crate::error::{ClientError, Result};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for reaching the upstream posts API.
///
/// Built once at process start and handed to [`BlogClient::new`](crate::BlogClient::new).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API, without a trailing slash.
    pub base_url: Url,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config for `base_url` with the default timeout.
    ///
    /// Fails with [`ClientError::Configuration`] when the URL is blank, does not
    /// parse, or is not http(s).
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::Configuration("API_URL not defined".to_string()));
        }

        let base_url = Url::parse(trimmed)
            .map_err(|e| ClientError::Configuration(format!("API_URL is not a valid URL: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::Configuration(format!(
                "API_URL must use http or https, got {}",
                base_url.scheme()
            )));
        }

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `API_URL` - Upstream base URL (required)
    /// - `API_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("API_URL").map_err(|_| ClientError::Configuration("API_URL not defined".to_string()))?;

        let timeout_secs = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self::new(&base_url)?.with_timeout(Duration::from_secs(timeout_secs)))
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL as a string without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
