//! HTTP client utilities for talking to the FonParam API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;

use crate::client::ApiError;
use crate::options::ClientOptions;

/// Identifier sent in the `User-Agent` header.
pub const CLIENT_IDENTIFIER: &str = concat!("fonparam-mcp/", env!("CARGO_PKG_VERSION"));

/// Build a configured HTTP client from client options.
///
/// The fixed JSON headers and client identifier are installed as defaults so that
/// every request carries them.
pub fn build_http_client(options: &ClientOptions) -> Result<Client, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_IDENTIFIER));

    let mut builder = Client::builder()
        .timeout(options.timeout)
        .default_headers(headers);

    if let Some(proxy_url) = &options.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| ApiError::Request(format!("invalid proxy {proxy_url}: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Extension trait for Response that logs the body before handing it on.
#[async_trait::async_trait]
pub trait ResponseExt {
    /// Get response text and log it. Consumes the response.
    async fn text_logged(self) -> Result<String, reqwest::Error>;

    /// Parse response as JSON and log it. Consumes the response.
    async fn json_logged<T: serde::de::DeserializeOwned>(self) -> Result<T, ApiError>;
}

#[async_trait::async_trait]
impl ResponseExt for reqwest::Response {
    async fn text_logged(self) -> Result<String, reqwest::Error> {
        let text = self.text().await?;
        tracing::debug!("API response ({} bytes):\n{}", text.len(), text);
        Ok(text)
    }

    async fn json_logged<T: serde::de::DeserializeOwned>(self) -> Result<T, ApiError> {
        let bytes = self.bytes().await.map_err(ApiError::from_transport)?;

        if let Ok(text) = std::str::from_utf8(&bytes) {
            tracing::debug!("API response ({} bytes):\n{}", text.len(), text);
        }

        serde_json::from_slice(&bytes).map_err(ApiError::from)
    }
}
