//! Transport error types.

use thiserror::Error;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Server initialization error (MCP handshake failed).
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// Service error from rmcp while serving requests.
    #[error("Service error: {0}")]
    ServiceError(String),
}

impl TransportError {
    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    /// Create a service error.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }
}
