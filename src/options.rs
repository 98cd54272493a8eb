//! Connection options for the FonParam API client.

use std::time::Duration;

/// Public FonParam API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.fonparam.com";

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport configuration for [`FonParamClient`](crate::client::FonParamClient).
///
/// Controls where requests go and how they are sent over the network.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the API, without a trailing endpoint path.
    pub base_url: String,
    /// Request timeout covering connect, send and body read.
    pub timeout: Duration,
    /// HTTP proxy URL.
    pub proxy: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
        }
    }
}

impl ClientOptions {
    /// Create default options pointing at the public API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Set the proxy.
    pub fn with_proxy(mut self, proxy_url: String) -> Self {
        self.proxy = Some(proxy_url);
        self
    }
}
