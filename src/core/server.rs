//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are routed through a `ToolRouter` built from the
//! [`ToolRegistry`], which owns the API executor.
//!
//! ## Tool Architecture
//!
//! Tools are described in `domains/tools/definitions/` as `ApiTool` impls
//! and registered once in `domains/tools/registry.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::api::{ApiClient, ApiExecutor};
use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalogue and dispatch.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the configured API.
    pub fn new(config: Config) -> CoreResult<Self> {
        let client = ApiClient::new(&config.api)?;
        info!("Using Ship It Squirrel API at {}", client.url_for(""));
        Ok(Self::with_executor(config, Arc::new(client)))
    }

    /// Create a server around an arbitrary executor.
    pub fn with_executor(config: Config, executor: Arc<dyn ApiExecutor>) -> Self {
        let registry = Arc::new(ToolRegistry::new(executor));
        Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config: Arc::new(config),
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Manage Ship It Squirrel servers, apps, deployments and bugs. \
                 Tools that change state (create, delete, deploy, restart, rollback) \
                 act immediately without asking for confirmation."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
