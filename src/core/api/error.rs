//! Errors produced by the Ship It Squirrel API executor.

use thiserror::Error;

/// Result type for executor operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API call.
///
/// Every variant carries exactly one human-readable message; the `Display`
/// output is what the calling agent sees.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The API answered with a non-success status.
    ///
    /// Displays as the bare message so an `{"error": "Not found"}` body
    /// surfaces as exactly `Not found`.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS, TLS).
    #[error("Request failed: {0}")]
    Transport(String),

    /// A success response whose body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Decode(String),

    /// Valid JSON that is not the expected payload (e.g. an array where an
    /// object was expected).
    #[error("Unexpected response: {0}")]
    UnexpectedShape(String),

    /// The request could not be built (bad path, header or body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Create a status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an unexpected shape error.
    pub fn unexpected_shape(msg: impl Into<String>) -> Self {
        Self::UnexpectedShape(msg.into())
    }

    /// Create an invalid request error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// HTTP status code, if the API responded at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
