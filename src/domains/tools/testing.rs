//! Helpers for tool tests.

use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::Value;

use super::api_tool::{ApiTool, invoke};
use super::error::ToolError;
use crate::core::api::testing::RecordingExecutor;

/// Turn a `json!` object literal into tool arguments.
pub fn args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("arguments must be a JSON object, got {}", other),
    }
}

/// Invoke `T` against a recording executor.
pub async fn call<T: ApiTool>(
    executor: &RecordingExecutor,
    arguments: Value,
) -> Result<CallToolResult, ToolError> {
    invoke::<T>(executor, args(arguments)).await
}

/// The single text block of a result.
pub fn text(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1, "expected one content block");
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {:?}", other),
    }
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
