//! Helius HTTP Client
//!
//! JSON-RPC client for the Helius DAS API. Provides timeout configuration,
//! user-agent headers, API key injection and rate-limit retries.

use crate::config::credentials::{ApiKey, API_KEY_VAR};
use crate::config::HeliusConfig;
use crate::error::{ConfigError, HeliusError, ProviderError};
use crate::helius::types::{JsonRpcRequest, JsonRpcResponse, SEARCH_ASSETS_METHOD};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const MAX_RETRIES: u32 = 3;
/// Longest `Retry-After` the client will wait out
const MAX_RETRY_AFTER_SECS: u64 = 10;

/// Helius DAS JSON-RPC client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HeliusClient {
    client: Client,
    base_url: String,
    api_key: Option<ApiKey>,
}

impl std::fmt::Debug for HeliusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeliusClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl HeliusClient {
    /// Creates a client with the default 10 second timeout
    pub fn new(config: HeliusConfig) -> Result<Self, HeliusError> {
        Self::with_timeout(config, Duration::from_secs(10))
    }

    pub fn with_timeout(config: HeliusConfig, timeout: Duration) -> Result<Self, HeliusError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HeliusError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Searches assets with the given (already sanitized) criteria
    ///
    /// Calls the `searchAssets` DAS method.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The `result` member of the response
    /// * `Ok(None)` - The response carried no result
    ///
    /// # Errors
    /// * `Config` - `HELIUS_API_KEY` is not configured
    /// * `Helius` - Network failure, HTTP error status or JSON-RPC error
    pub async fn search_assets(&self, params: &Value) -> Result<Option<Value>, ProviderError> {
        self.call(SEARCH_ASSETS_METHOD, params).await
    }

    /// Performs a JSON-RPC call
    ///
    /// HTTP 429 responses are retried up to 3 times, waiting for the
    /// `Retry-After` header when present and 1s, 2s, 4s otherwise. A
    /// `Retry-After` longer than 10s fails the call immediately.
    pub async fn call(&self, method: &str, params: &Value) -> Result<Option<Value>, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let url = format!("{}/", self.base_url);
        let body = JsonRpcRequest::new(method, params);
        let mut retry_count = 0;

        loop {
            tracing::debug!(method, url = %url, "Sending Helius request");

            let resp = self
                .client
                .post(&url)
                .query(&[("api-key", api_key.expose_secret())])
                .json(&body)
                .send()
                .await
                .map_err(HeliusError::from)?;

            let status = resp.status();

            if status.as_u16() == 429 {
                if retry_count >= MAX_RETRIES {
                    return Err(HeliusError::RateLimitError(format!(
                        "Rate limit exceeded after {} retries. Wait 60 seconds before retrying.",
                        MAX_RETRIES
                    ))
                    .into());
                }

                let retry_after = resp
                    .headers()
                    .get("retry-after")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or_else(|| 2_u64.pow(retry_count));

                if retry_after > MAX_RETRY_AFTER_SECS {
                    tracing::warn!(
                        "Rate limit hit (429). Retry-After of {}s exceeds {}s, giving up.",
                        retry_after,
                        MAX_RETRY_AFTER_SECS
                    );
                    return Err(HeliusError::RateLimitError(format!(
                        "Helius asked to retry after {} seconds.",
                        retry_after
                    ))
                    .into());
                }

                tracing::warn!(
                    "Rate limit hit (429). Retry {} of {}. Waiting {}s before retry.",
                    retry_count + 1,
                    MAX_RETRIES,
                    retry_after
                );

                tokio::time::sleep(Duration::from_secs(retry_after)).await;
                retry_count += 1;
                continue;
            }

            // JSON-RPC errors may come back with a 4xx status and a JSON body
            let bytes = resp.bytes().await.map_err(HeliusError::from)?;
            let response = match serde_json::from_slice::<JsonRpcResponse>(&bytes) {
                Ok(response) if response.error.is_some() => response,
                _ if !status.is_success() => {
                    return Err(HeliusError::from_status(status.as_u16()).into());
                }
                Ok(response) => response,
                Err(err) => return Err(HeliusError::from(err).into()),
            };

            if let Some(error) = response.error {
                tracing::warn!(code = error.code, "Helius returned a JSON-RPC error");
                return Err(HeliusError::Rpc {
                    code: error.code,
                    message: error.message,
                }
                .into());
            }

            return Ok(response.result.filter(|result| !result.is_null()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_api_key() {
        let config = HeliusConfig::new(Some(ApiKey::new("super-secret-key")), "http://localhost");
        let client = HeliusClient::new(config).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("http://localhost"));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error() {
        let client = HeliusClient::new(HeliusConfig::default()).unwrap();

        let err = client
            .search_assets(&serde_json::json!({ "ownerAddress": "abc" }))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Config(ConfigError::Missing("HELIUS_API_KEY"))
        ));
    }
}
