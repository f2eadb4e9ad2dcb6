//! MCP Tool Router and ServerHandler Implementation
//!
//! This module implements the MCP protocol ServerHandler trait and the
//! `searchAssets` tool using rmcp SDK macros.

use crate::error::ProviderError;
use crate::mcp::server::DasServer;
use crate::mcp::types::SearchAssetsParams;
use crate::sanitize::sanitize_value;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolResult, Content, ErrorData, Implementation, InitializeResult, ProtocolVersion,
    ServerCapabilities, ToolsCapability,
};
use rmcp::{tool, tool_handler, tool_router};

/// Tool result text used when Helius answers without a result
pub const UNDEFINED_RESPONSE_MESSAGE: &str =
    r#"{"message": "Received undefined response from Helius API"}"#;

/// MCP Tool Router for DAS operations
#[tool_router(vis = "pub")]
impl DasServer {
    /// Search digital assets
    ///
    /// Failures are reported inside the tool result with `isError` set, never
    /// as protocol errors.
    #[tool(
        name = "searchAssets",
        description = "will return assets based on the custom search criteria passed in. This can define compressed, regular NFTs, and fungible tokens"
    )]
    pub async fn search_assets(
        &self,
        params: Parameters<SearchAssetsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        match self.run_search_assets(params.0).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(err) => {
                tracing::error!(error = %err, "Error searching assets");
                Ok(CallToolResult::error(vec![Content::text(format!(
                    "Error searching assets: {}",
                    err
                ))]))
            }
        }
    }
}

impl DasServer {
    async fn run_search_assets(&self, params: SearchAssetsParams) -> Result<String, ProviderError> {
        let raw = serde_json::to_value(&params)?;
        tracing::debug!(params = %raw, "Params before cleanup");

        let cleaned = sanitize_value(raw);
        tracing::debug!(params = %cleaned, "Cleaned params");

        let text = match self.client.search_assets(&cleaned).await? {
            Some(result) => serde_json::to_string_pretty(&result)?,
            None => UNDEFINED_RESPONSE_MESSAGE.to_string(),
        };

        Ok(text)
    }
}

/// ServerHandler trait implementation
#[tool_handler(router = self.tool_router)]
impl ServerHandler for DasServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("DAS MCP Server".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(
                "Searches Solana digital assets (fungible tokens, NFTs, compressed NFTs) \
                through the Helius DAS searchAssets API."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeliusConfig;
    use serde_json::{json, Value};

    fn server_without_key() -> DasServer {
        DasServer::new(HeliusConfig::new(None, "http://127.0.0.1:9")).unwrap()
    }

    #[test]
    fn test_server_info() {
        let info = server_without_key().get_info();
        assert_eq!(info.server_info.name, "das-provider");
        assert_eq!(info.server_info.title.as_deref(), Some("DAS MCP Server"));
        assert_eq!(info.protocol_version, ProtocolVersion::LATEST);
        assert_ne!(info.protocol_version, ProtocolVersion::V_2024_11_05);
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_tool_is_registered() {
        let tools = DasServer::tool_router().list_all();
        assert_eq!(tools.len(), 1);

        let tool = &tools[0];
        assert_eq!(tool.name, "searchAssets");

        let schema = Value::Object(tool.input_schema.as_ref().clone());
        assert!(schema["properties"]["ownerAddress"].is_object());
        assert!(schema["properties"]["sortBy"].is_object());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_reported_as_tool_error() {
        let server = server_without_key();

        let result = server
            .search_assets(Parameters(SearchAssetsParams::for_owner("abc")))
            .await
            .expect("tool errors are returned as data");

        let result = serde_json::to_value(&result).unwrap();
        assert_eq!(result["isError"], json!(true));
        assert_eq!(
            result["content"][0]["text"],
            json!("Error searching assets: HELIUS_API_KEY is not set in environment variables")
        );
    }
}
