//! Ship It Squirrel MCP Server
//!
//! This crate exposes the Ship It Squirrel deployment platform to AI
//! assistants over the Model Context Protocol. Every tool maps onto one
//! authenticated call to the platform's REST API and returns a Markdown
//! summary of the result.
//!
//! # Architecture
//!
//! - **core**: API client, configuration, error handling, the server and its stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **models**: Typed views of API payloads
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use shipitsquirrel_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
