//! API Credential Management
//!
//! Secure handling of the Helius API key loaded from the environment.
//! The key is never logged and is masked whenever it is displayed.

use crate::error::ConfigError;
use std::fmt;

/// Environment variable holding the Helius API key
pub const API_KEY_VAR: &str = "HELIUS_API_KEY";

/// Secure string wrapper that masks sensitive data in logs
///
/// Debug output shows only `SecretString(***)` and Display shows the
/// truncated form `first4...last4`.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: String) -> Self {
        SecretString(value)
    }

    /// Returns the inner string
    ///
    /// Only use this when building the outgoing request. Never log the result.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Masked form for logging (e.g. "abcd...wxyz")
    pub fn masked(&self) -> String {
        let s = &self.0;
        if s.chars().count() <= 8 {
            return "***".to_string();
        }
        let head: String = s.chars().take(4).collect();
        let tail: String = s.chars().skip(s.chars().count() - 4).collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(***)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString::new(s)
    }
}

/// Helius API key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(SecretString::new(key.into()))
    }

    /// Loads the key from `HELIUS_API_KEY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the key through an arbitrary variable lookup
    ///
    /// Trims whitespace and rejects empty values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let key = raw.trim();

        if key.is_empty() {
            return Err(ConfigError::Empty(API_KEY_VAR));
        }

        Ok(Self::new(key))
    }

    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn masked(&self) -> String {
        self.0.masked()
    }
}
