//! Configuration Management
//!
//! Loads the Helius API key, endpoint selection and HTTP bind address from
//! environment variables.

pub mod credentials;
pub mod helius;

#[cfg(feature = "http_transport")]
pub mod http;

// Re-export
pub use credentials::{ApiKey, SecretString};
pub use helius::HeliusConfig;

#[cfg(feature = "http_transport")]
pub use http::HttpConfig;
