//! HTTP Server Configuration

use crate::error::ConfigError;
use std::net::SocketAddr;

/// HTTP server configuration
///
/// ## Environment Variables
///
/// - `HTTP_HOST`: Server bind address (default: 0.0.0.0)
/// - `HTTP_PORT`: Server port (default: 8000)
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Server bind address
    pub addr: SocketAddr,
}

impl HttpConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;

    /// Load HTTP configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HTTP_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let port = match lookup("HTTP_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "HTTP_PORT",
                reason: e.to_string(),
            })?,
            None => Self::DEFAULT_PORT,
        };

        Self::with_host_port(&host, port)
    }

    pub fn with_host_port(host: &str, port: u16) -> Result<Self, ConfigError> {
        let addr = format!("{}:{}", host, port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "HTTP_HOST",
                reason: e.to_string(),
            })?;

        Ok(Self { addr })
    }

    /// Replaces the port, keeping the host
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = HttpConfig::from_lookup(|_| None).expect("Failed to load config");
        assert_eq!(config.addr.to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_custom_values() {
        let config = HttpConfig::from_lookup(|name| match name {
            "HTTP_HOST" => Some("127.0.0.1".to_string()),
            "HTTP_PORT" => Some("9090".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:9090");
        assert_eq!(config.with_port(7000).addr.to_string(), "127.0.0.1:7000");
    }

    #[test]
    fn test_invalid_port() {
        let err = HttpConfig::from_lookup(|name| {
            (name == "HTTP_PORT").then(|| "not-a-port".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "HTTP_PORT", .. }));
    }
}
