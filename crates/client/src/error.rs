//! Error types for the index administration client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during index administration.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid argument supplied by the caller (e.g. an empty index name).
    ///
    /// Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The index (or another addressed resource) does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Create was issued for an index that is already present.
    #[error("Index already exists: {0}")]
    AlreadyExists(String),

    /// The server rejected a settings update, typically a non-dynamic setting
    /// on an open index.
    #[error("Invalid setting for index '{index}': {message}")]
    InvalidSetting { index: String, message: String },

    /// A response lacked a field the normalizer expects in every known shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The target server does not offer the requested capability.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Any other non-2xx response.
    #[error("Request failed ({status}) at {path}: {message}")]
    RequestFailed {
        status: u16,
        path: String,
        message: String,
    },

    /// Connection-level failure (refused, reset, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client construction or body read error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request or response body could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Check if this error is retryable by a caller-side policy.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// Check if an HTTP status code is retryable by the transport.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests
    /// - 502: Bad Gateway
    /// - 503: Service Unavailable
    /// - 504: Gateway Timeout
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }
}
