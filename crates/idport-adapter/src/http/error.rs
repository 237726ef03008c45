/*
[INPUT]:  Error sources (HTTP transport, service API, serialization, session)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the IdPort adapter.
#[derive(Error, Debug)]
pub enum IdportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Service reported errors inline in an otherwise well-formed response
    #[error("provider reported errors: {}", .messages.join(", "))]
    Provider { messages: Vec<String> },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response was well-formed but missing expected content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Operation requires a logged-in session
    #[error("no user is logged in")]
    NotLoggedIn,

    /// Session cache read/write failed
    #[error("Session cache error: {0}")]
    Cache(#[from] std::io::Error),
}

impl IdportError {
    /// Create a provider-reported error from an inline `errors` list.
    pub fn provider(messages: Vec<String>) -> Self {
        IdportError::Provider { messages }
    }

    /// Check if the error carries provider-reported messages.
    pub fn is_provider_error(&self) -> bool {
        matches!(self, IdportError::Provider { .. })
    }

    /// Create an API error from status code and message.
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        IdportError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for IdPort operations.
pub type Result<T> = std::result::Result<T, IdportError>;
