/*
[INPUT]:  Error sources (HTTP transport, API status, serialization, config)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Apaczka adapter
#[derive(Error, Debug)]
pub enum ApaczkaError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApaczkaError {
    /// Create an API error from a status code and the response body text
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        ApaczkaError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }

    /// HTTP status carried by an `Api` error
    pub fn status(&self) -> Option<i32> {
        match self {
            ApaczkaError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if the gateway rejected the signature or credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApaczkaError::Api { code: 401 | 403, .. })
    }
}

/// Result type alias for Apaczka operations
pub type Result<T> = std::result::Result<T, ApaczkaError>;
