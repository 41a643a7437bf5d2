//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::core::api::ApiError;

/// Errors that stop a tool call before any API request is sent.
///
/// Remote API failures are not `ToolError`s: they become error results with
/// the API's message, see [`super::invoke`].
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

/// Only request construction (`with_json`, `with_query`) crosses this
/// boundary, and it fails only on arguments that cannot be encoded.
impl From<ApiError> for ToolError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidRequest(msg) => Self::InvalidArguments(msg),
            other => Self::InvalidArguments(other.to_string()),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        McpError::invalid_params(err.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_invalid_request_maps_to_invalid_arguments() {
        let err: ToolError = ApiError::invalid_request("Unencodable query").into();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert_eq!(err.to_string(), "Invalid arguments: Unencodable query");
    }

    #[test]
    fn test_mcp_error_codes() {
        let not_found: McpError = ToolError::not_found("nope").into();
        assert_eq!(not_found.code, ErrorCode::INVALID_PARAMS);
        assert!(not_found.message.contains("Tool not found: nope"));

        let invalid: McpError = ToolError::invalid_arguments("app_id missing").into();
        assert_eq!(invalid.code, ErrorCode::INVALID_PARAMS);
    }
}
