// Library exports for das-provider

pub mod config; // Configuration management
pub mod error;
pub mod helius; // Helius DAS API client
pub mod mcp; // MCP server implementation
pub mod sanitize; // Request parameter sanitization
pub mod transport; // MCP transport layer (HTTP, stdio)
