//! Client configuration

use std::time::Duration;

/// Default backend API root
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default order list refresh period in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Client configuration for connecting to the restaurant backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TAVOLA_API_URL | http://localhost:8080/api | API root, `/api` included |
/// | TAVOLA_TIMEOUT_SECS | unset | Per-request timeout; unset means none |
/// | TAVOLA_POLL_INTERVAL_SECS | 30 | Order list refresh period |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds; requests wait indefinitely when `None`
    pub timeout: Option<u64>,

    /// Order list refresh period in seconds
    pub poll_interval: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            poll_interval: DEFAULT_POLL_INTERVAL_SECS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("TAVOLA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
        );
        config.timeout = std::env::var("TAVOLA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());
        if let Some(secs) = std::env::var("TAVOLA_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
        {
            config.poll_interval = secs;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the order list refresh period (zero is ignored)
    pub fn with_poll_interval(mut self, seconds: u64) -> Self {
        if seconds > 0 {
            self.poll_interval = seconds;
        }
        self
    }

    pub fn poll_period(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::new(self)
    }

    /// Create a gateway over the network client
    pub fn build_gateway(&self) -> crate::ClientResult<crate::Gateway<crate::NetworkHttpClient>> {
        Ok(crate::Gateway::new(self.build_http_client()?))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
