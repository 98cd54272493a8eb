//! Process configuration read from the environment.

use std::time::Duration;

use thiserror::Error;

use crate::options::{ClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Overrides the API base URL.
pub const BASE_URL_VAR: &str = "FONPARAM_API_URL";
/// Overrides the request timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "FONPARAM_TIMEOUT_SECS";
/// Routes every request through an HTTP proxy.
pub const PROXY_VAR: &str = "FONPARAM_PROXY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub proxy: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
        }
    }
}

impl Config {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: TIMEOUT_VAR,
                        value,
                    })
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        let proxy = lookup(PROXY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(Self {
            base_url,
            timeout,
            proxy,
        })
    }

    pub fn client_options(&self) -> ClientOptions {
        let options = ClientOptions::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout);
        match &self.proxy {
            Some(proxy) => options.with_proxy(proxy.clone()),
            None => options,
        }
    }
}
