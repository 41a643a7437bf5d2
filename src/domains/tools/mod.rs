//! Tools domain module.
//!
//! Tools are the remote actions MCP clients can call. Each one maps its
//! arguments onto a single Ship It Squirrel API request and renders the
//! response as Markdown.
//!
//! ## Architecture
//!
//! - `api_tool.rs` - The [`ApiTool`] description trait and its interpreter
//! - `definitions/` - Tool descriptions, one file per resource
//! - `registry.rs` - The fixed catalogue and name-based dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `render.rs` - Placeholder and formatting helpers shared by renderers
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing [`ApiTool`] in the matching file under
//!    `definitions/` and export it from `definitions/mod.rs`
//! 2. Register it in `ToolRegistry::new`
//!
//! The router and the server pick it up from the registry.

pub mod api_tool;
pub mod definitions;
mod error;
mod registry;
pub mod render;
pub mod router;

#[cfg(test)]
pub mod testing;

pub use api_tool::{ApiTool, Effect, NoParams, invoke};
pub use error::ToolError;
pub use registry::{RegisteredTool, ToolRegistry};
pub use router::build_tool_router;
