//! Model Context Protocol (MCP) server implementation for the DAS provider
//!
//! Exposes a single tool, `searchAssets`, backed by the Helius DAS API.
//! The implementation uses rmcp SDK 0.8 with procedural macros for routing.

pub mod handler;
pub mod server;
pub mod types;

// Re-exports
pub use server::DasServer;
pub use types::SearchAssetsParams;
