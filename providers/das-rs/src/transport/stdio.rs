//! Stdio Transport for MCP Server
//!
//! Provides standard I/O transport for local MCP connections (e.g., Claude Desktop).

use crate::error::ProviderError;
use crate::mcp::DasServer;
use rmcp::ServiceExt;

/// Runs the MCP server with stdio transport
///
/// Messages are read from stdin and responses are written to stdout.
/// Logging goes to stderr so it never interleaves with the protocol stream.
pub async fn run_stdio_server(server: DasServer) -> Result<(), ProviderError> {
    tracing::info!("Starting DAS MCP server in stdio mode");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ProviderError::Transport(e.to_string()))?;

    tracing::info!("MCP server ready on stdio");

    service
        .waiting()
        .await
        .map_err(|e| ProviderError::Transport(e.to_string()))?;

    tracing::info!("MCP server shutdown complete");

    Ok(())
}
