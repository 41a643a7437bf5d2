//! Transport layer for the MCP server.
//!
//! The server is reached over **STDIO** (standard input/output), the default
//! MCP mode for locally spawned servers. It opens no listening socket.

mod error;
pub mod stdio;

pub use error::TransportError;
pub use stdio::StdioTransport;
