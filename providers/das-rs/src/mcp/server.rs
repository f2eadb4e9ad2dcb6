//! MCP Server Implementation
//!
//! This module contains the DasServer struct which implements the MCP ServerHandler trait.

use crate::config::HeliusConfig;
use crate::error::{HeliusError, ProviderError};
use crate::helius::HeliusClient;
use rmcp::handler::server::router::tool::ToolRouter;

/// Main DAS MCP Server struct
///
/// Built once at startup and cloned into every MCP session. Holds the Helius
/// client and the tool router.
#[derive(Clone)]
pub struct DasServer {
    /// Helius DAS API client
    pub client: HeliusClient,

    /// Tool router for MCP tool routing
    pub tool_router: ToolRouter<Self>,
}

impl DasServer {
    /// Creates a server from an explicit Helius configuration
    pub fn new(config: HeliusConfig) -> Result<Self, HeliusError> {
        Ok(Self::with_client(HeliusClient::new(config)?))
    }

    pub fn with_client(client: HeliusClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Creates a server configured from environment variables
    ///
    /// A missing `HELIUS_API_KEY` is logged but does not fail startup; each
    /// tool call reports it instead.
    pub fn from_env() -> Result<Self, ProviderError> {
        let config = HeliusConfig::from_env()?;

        match &config.api_key {
            Some(key) => tracing::info!(api_key = %key.masked(), "Helius API key configured"),
            None => {
                tracing::warn!("HELIUS_API_KEY not set - searchAssets calls will return an error")
            }
        }
        tracing::info!(base_url = %config.base_url, "Using Helius endpoint");

        Ok(Self::new(config)?)
    }
}
