//! Helius Endpoint Configuration
//!
//! ## Environment Variables
//!
//! - `HELIUS_API_KEY`: API key (tool calls fail with a tool error when unset)
//! - `HELIUS_CLUSTER`: `mainnet` or `devnet` (default: mainnet)
//! - `HELIUS_RPC_URL`: Base URL override, takes precedence over the cluster

use crate::config::credentials::ApiKey;
use crate::error::ConfigError;
use crate::helius::types::Cluster;

/// Settings for the Helius DAS client
#[derive(Debug, Clone)]
pub struct HeliusConfig {
    /// API key, `None` when not configured
    pub api_key: Option<ApiKey>,

    /// Base URL of the JSON-RPC endpoint
    pub base_url: String,
}

impl HeliusConfig {
    pub fn new(api_key: Option<ApiKey>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Loads configuration from environment variables
    ///
    /// A missing API key is not an error here; it is reported on each tool
    /// call instead so the server can still start and list its tools.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match ApiKey::from_lookup(&lookup) {
            Ok(key) => Some(key),
            Err(ConfigError::Missing(_)) | Err(ConfigError::Empty(_)) => None,
            Err(err) => return Err(err),
        };

        let cluster = match lookup("HELIUS_CLUSTER") {
            Some(value) => value.parse::<Cluster>()?,
            None => Cluster::default(),
        };

        let base_url = lookup("HELIUS_RPC_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| cluster.base_url().to_string());

        Ok(Self { api_key, base_url })
    }
}

impl Default for HeliusConfig {
    fn default() -> Self {
        Self::new(None, Cluster::default().base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_to_mainnet_without_key() {
        let config = HeliusConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://mainnet.helius-rpc.com");
    }

    #[test]
    fn test_devnet_cluster() {
        let config = HeliusConfig::from_lookup(lookup(&[
            ("HELIUS_API_KEY", "key"),
            ("HELIUS_CLUSTER", "devnet"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.unwrap().expose_secret(), "key");
        assert_eq!(config.base_url, "https://devnet.helius-rpc.com");
    }

    #[test]
    fn test_rpc_url_override_wins() {
        let config = HeliusConfig::from_lookup(lookup(&[
            ("HELIUS_CLUSTER", "devnet"),
            ("HELIUS_RPC_URL", "http://127.0.0.1:9000/"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_unknown_cluster_is_rejected() {
        let err = HeliusConfig::from_lookup(lookup(&[("HELIUS_CLUSTER", "testnet")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "HELIUS_CLUSTER", .. }));
    }
}
