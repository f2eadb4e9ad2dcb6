use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Helius(#[from] HeliusError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set in environment variables")]
    Missing(&'static str),

    #[error("{0} is empty after trimming whitespace")]
    Empty(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Errors returned by the Helius DAS API client
#[derive(Error, Debug)]
pub enum HeliusError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Helius RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for HeliusError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HeliusError::ConnectionError(
                "Request timeout. Please check your internet connection.".to_string(),
            )
        } else if err.is_connect() {
            HeliusError::ConnectionError(
                "Failed to connect to Helius API. Please check your internet connection."
                    .to_string(),
            )
        } else if let Some(status) = err.status() {
            HeliusError::from_status(status.as_u16())
        } else if err.is_decode() {
            HeliusError::ParseError(format!("Invalid response body: {}", err))
        } else {
            HeliusError::InternalError(err.to_string())
        }
    }
}

impl HeliusError {
    /// Maps a non-success HTTP status to an error
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => HeliusError::ConnectionError(format!(
                "Helius rejected the API key (HTTP {}). Check HELIUS_API_KEY.",
                status
            )),
            429 => HeliusError::RateLimitError(
                "Too many requests to Helius API. Retry after 60 seconds.".to_string(),
            ),
            500..=599 => HeliusError::ConnectionError(format!(
                "Helius server error (HTTP {}). Please try again later.",
                status
            )),
            _ => HeliusError::InternalError(format!("HTTP error: {}", status)),
        }
    }
}

impl From<serde_json::Error> for HeliusError {
    fn from(err: serde_json::Error) -> Self {
        HeliusError::ParseError(format!("JSON parsing failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = ProviderError::from(ConfigError::Missing("HELIUS_API_KEY"));
        assert_eq!(
            err.to_string(),
            "HELIUS_API_KEY is not set in environment variables"
        );
    }

    #[test]
    fn test_helius_error_is_transparent() {
        let err = ProviderError::from(HeliusError::Rpc {
            code: -32602,
            message: "invalid params".to_string(),
        });
        assert_eq!(err.to_string(), "Helius RPC error -32602: invalid params");
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(HeliusError::from_status(429), HeliusError::RateLimitError(_)));
        assert!(matches!(HeliusError::from_status(503), HeliusError::ConnectionError(_)));
        assert!(matches!(HeliusError::from_status(401), HeliusError::ConnectionError(_)));
        assert!(matches!(HeliusError::from_status(404), HeliusError::InternalError(_)));
    }
}
