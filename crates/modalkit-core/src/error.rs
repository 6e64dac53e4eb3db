//! Error types for platform API calls.

use thiserror::Error;

/// Errors surfaced by [`ChatClient`](crate::client::ChatClient) operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client is not connected to the platform.
    #[error("client is not connected")]
    NotConnected,

    /// The platform rejected the request.
    #[error("API error ({status}): {message}")]
    Request {
        /// HTTP-like status code reported by the platform.
        status: u16,
        /// Error message reported by the platform.
        message: String,
    },

    /// The request timed out.
    #[error("API call timed out")]
    Timeout,

    /// The interaction token is no longer valid for responses.
    #[error("interaction token expired")]
    TokenExpired,

    /// Failed to serialize or deserialize a payload.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Other client-specific error.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for platform API calls.
pub type ApiResult<T> = Result<T, ApiError>;
