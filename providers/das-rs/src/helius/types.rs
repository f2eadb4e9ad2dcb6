//! Helius API Type Definitions
//!
//! JSON-RPC 2.0 envelopes used to talk to the DAS endpoint, plus cluster
//! selection.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// DAS method searching assets by owner, creator, grouping and other criteria
pub const SEARCH_ASSETS_METHOD: &str = "searchAssets";

/// Solana cluster served by a Helius RPC endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cluster {
    #[default]
    Mainnet,
    Devnet,
}

impl Cluster {
    pub fn base_url(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "https://mainnet.helius-rpc.com",
            Cluster::Devnet => "https://devnet.helius-rpc.com",
        }
    }
}

impl FromStr for Cluster {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Cluster::Mainnet),
            "devnet" => Ok(Cluster::Devnet),
            other => Err(ConfigError::Invalid {
                name: "HELIUS_CLUSTER",
                reason: format!("unknown cluster '{}', expected mainnet or devnet", other),
            }),
        }
    }
}

/// JSON-RPC 2.0 request body
///
/// # Example
/// ```json
/// {
///   "jsonrpc": "2.0",
///   "id": "das-provider",
///   "method": "searchAssets",
///   "params": { "ownerAddress": "86xCnPeV69n6t3DnyGvkKobf9FdN2H9oiVDdaMpo2MMY" }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    pub params: &'a Value,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, params: &'a Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id: env!("CARGO_PKG_NAME"),
            method,
            params,
        }
    }
}

/// JSON-RPC 2.0 response body
///
/// Exactly one of `result` / `error` is expected, but a response carrying
/// neither is tolerated and reported as an empty result.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,

    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

/// Error object of a failed JSON-RPC call
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcErrorObject {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cluster_parsing() {
        assert_eq!("mainnet".parse::<Cluster>().unwrap(), Cluster::Mainnet);
        assert_eq!("Mainnet-Beta".parse::<Cluster>().unwrap(), Cluster::Mainnet);
        assert_eq!(" devnet ".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert!("localnet".parse::<Cluster>().is_err());
    }

    #[test]
    fn test_request_serialization() {
        let params = json!({ "ownerAddress": "abc" });
        let request = JsonRpcRequest::new(SEARCH_ASSETS_METHOD, &params);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": "das-provider",
                "method": "searchAssets",
                "params": { "ownerAddress": "abc" }
            })
        );
    }

    #[test]
    fn test_response_with_result() {
        let response: JsonRpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"1","result":{"total":0,"items":[]}}"#)
                .unwrap();
        assert_eq!(response.result, Some(json!({ "total": 0, "items": [] })));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_response_with_null_result() {
        let response: JsonRpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":"1","result":null}"#).unwrap();
        assert!(response.result.is_none());
    }

    #[test]
    fn test_response_with_error() {
        let response: JsonRpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":"1","error":{"code":-32602,"message":"Invalid params"}}"#,
        )
        .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Invalid params");
    }
}
