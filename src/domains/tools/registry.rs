//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The fixed catalogue of tools, registered once at startup
//! - Name-based dispatch with argument validation
//! - Tool metadata for listing

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::api_tool::{ApiTool, invoke};
use super::definitions::{
    CreateAppTool, CreateServerTool, DeleteAppTool, DeleteServerTool, DeployAppTool,
    GetAppLogsTool, GetAppTool, GetBugTool, GetDeploymentTool, GetServerTool, IgnoreBugTool,
    ListAppsTool, ListBugsTool, ListDeploymentsTool, ListRegionsTool, ListServersTool,
    ListSizesTool, ReopenBugTool, ResolveBugTool, RestartAppTool, RollbackAppTool, UpdateAppTool,
};
use super::error::ToolError;
use crate::core::api::ApiExecutor;

type ToolFuture = BoxFuture<'static, Result<CallToolResult, ToolError>>;
type ToolHandler = fn(Arc<dyn ApiExecutor>, JsonObject) -> ToolFuture;

/// One entry of the catalogue: metadata plus its handler.
pub struct RegisteredTool {
    name: &'static str,
    tool: Tool,
    handler: ToolHandler,
}

impl RegisteredTool {
    fn of<T: ApiTool>() -> Self {
        Self {
            name: T::NAME,
            tool: T::to_tool(),
            handler: handle::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }
}

fn handle<T: ApiTool>(executor: Arc<dyn ApiExecutor>, arguments: JsonObject) -> ToolFuture {
    async move { invoke::<T>(executor.as_ref(), arguments).await }.boxed()
}

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    executor: Arc<dyn ApiExecutor>,
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Create the registry with the full tool catalogue.
    pub fn new(executor: Arc<dyn ApiExecutor>) -> Self {
        let mut registry = Self {
            executor,
            tools: Vec::new(),
        };

        // Servers
        registry.register::<ListServersTool>();
        registry.register::<GetServerTool>();
        registry.register::<CreateServerTool>();
        registry.register::<DeleteServerTool>();
        registry.register::<ListRegionsTool>();
        registry.register::<ListSizesTool>();

        // Apps
        registry.register::<ListAppsTool>();
        registry.register::<GetAppTool>();
        registry.register::<CreateAppTool>();
        registry.register::<UpdateAppTool>();
        registry.register::<DeleteAppTool>();

        // Deployments and operations
        registry.register::<ListDeploymentsTool>();
        registry.register::<GetDeploymentTool>();
        registry.register::<DeployAppTool>();
        registry.register::<RestartAppTool>();
        registry.register::<RollbackAppTool>();
        registry.register::<GetAppLogsTool>();

        // Bugs
        registry.register::<ListBugsTool>();
        registry.register::<GetBugTool>();
        registry.register::<ResolveBugTool>();
        registry.register::<IgnoreBugTool>();
        registry.register::<ReopenBugTool>();

        registry
    }

    fn register<T: ApiTool>(&mut self) {
        assert!(
            self.find(T::NAME).is_none(),
            "tool registered twice: {}",
            T::NAME
        );
        self.tools.push(RegisteredTool::of::<T>());
    }

    fn find(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|entry| entry.name == name)
    }

    /// Registered tools in registration order.
    pub fn entries(&self) -> &[RegisteredTool] {
        &self.tools
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|entry| entry.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|entry| entry.tool.clone()).collect()
    }

    /// Dispatch a tool call by name.
    ///
    /// Unknown names and invalid arguments fail without touching the API.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let entry = self.find(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;
        (entry.handler)(self.executor.clone(), arguments).await
    }
}
