//! Error types and handling for the MCP server.
//!
//! Startup and serving failures share one error type so the entry point can
//! propagate them with `?`. Per-call failures never reach this level: tool
//! errors become MCP errors and API failures become error results.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the MCP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
