//! MCP transport layer
//!
//! - HTTP: SSE (`/sse`, `/sse/message`) and streamable HTTP (`/mcp`) on one router
//! - Stdio: standard I/O for local connections

#[cfg(feature = "http_transport")]
pub mod http;

pub mod stdio;

/// Transport mode selection for the MCP server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// SSE + streamable HTTP on one listener
    #[cfg(feature = "http_transport")]
    Http,

    /// Standard I/O transport (local MCP connections)
    Stdio,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "http_transport")]
            TransportMode::Http => "http",
            TransportMode::Stdio => "stdio",
        }
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            #[cfg(feature = "http_transport")]
            "http" | "sse" => Ok(TransportMode::Http),
            "stdio" => Ok(TransportMode::Stdio),
            other => Err(format!("Invalid mode: {}", other)),
        }
    }
}

impl Default for TransportMode {
    #[cfg(feature = "http_transport")]
    fn default() -> Self {
        TransportMode::Http
    }

    #[cfg(not(feature = "http_transport"))]
    fn default() -> Self {
        TransportMode::Stdio
    }
}
