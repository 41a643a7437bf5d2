//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! the Ship It Squirrel API client, configuration, error handling, server
//! lifecycle and the stdio transport.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::StdioTransport;
