//! STDIO transport implementation.
//!
//! MCP over standard input/output. Logging goes to stderr, so stdout carries
//! protocol messages only.

use rmcp::ServiceExt;
use tracing::info;

use super::TransportError;
use crate::core::McpServer;
use crate::core::error::Result;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` over stdin/stdout until the client disconnects.
    pub async fn run(server: McpServer) -> Result<()> {
        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        info!("Ship It Squirrel MCP server running");

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
