//! Helius DAS API Client
//!
//! This module contains the JSON-RPC client for the Helius Digital Asset
//! Standard API.

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::HeliusClient;
pub use types::Cluster;
