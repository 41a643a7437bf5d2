//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every registered tool becomes one route whose handler forwards the raw
//! arguments to [`ToolRegistry::call_tool`], so argument validation and
//! dispatch live in one place. Unknown tool names are rejected by rmcp
//! before any route runs.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .entries()
        .iter()
        .fold(ToolRouter::new(), |router, entry| {
            let name = entry.name();
            let registry = registry.clone();
            router.with_route(ToolRoute::new_dyn(
                entry.tool().clone(),
                move |ctx: ToolCallContext<'_, S>| {
                    let registry = registry.clone();
                    let args = ctx.arguments.clone().unwrap_or_default();
                    async move {
                        registry
                            .call_tool(name, args)
                            .await
                            .map_err(McpError::from)
                    }
                    .boxed()
                },
            ))
        })
}
