//! Declarative tool definitions and their single interpreter.
//!
//! A tool is described by an [`ApiTool`] impl: its name, description,
//! parameter type (which doubles as the JSON schema), how parameters project
//! onto an [`ApiRequest`], the response type, and how a response renders to
//! text. [`invoke`] runs any such description end to end:
//!
//! ```text
//! arguments -> Params -> ApiRequest -> executor -> JSON -> Response -> text
//! ```
//!
//! Argument problems are returned as [`ToolError`] before the executor is
//! touched. API failures come back as an error [`CallToolResult`] carrying
//! exactly the API's message.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use super::error::ToolError;
use super::render::{error_result, success_result};
use crate::core::api::{ApiError, ApiExecutor, ApiRequest};

/// What a tool does to remote state. Drives the MCP tool annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Reads only.
    Read,
    /// Creates something or starts an action; repeating it repeats the effect.
    Write,
    /// Changes state, but repeating the call changes nothing further.
    Idempotent,
    /// Removes something.
    Destructive,
}

impl Effect {
    /// Advisory annotations for clients. The server itself never asks for
    /// confirmation.
    pub fn annotations(self) -> ToolAnnotations {
        let (read_only, destructive, idempotent) = match self {
            Self::Read => (true, false, true),
            Self::Write => (false, false, false),
            Self::Idempotent => (false, false, true),
            Self::Destructive => (false, true, true),
        };
        ToolAnnotations::new()
            .read_only(read_only)
            .destructive(destructive)
            .idempotent(idempotent)
            .open_world(true)
    }
}

/// Declarative description of one tool backed by one API call.
pub trait ApiTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Effect on remote state.
    const EFFECT: Effect = Effect::Read;

    /// Validated arguments; also the advertised input schema.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Decoded response payload.
    type Response: DeserializeOwned;

    /// Project arguments onto the API call.
    fn request(params: &Self::Params) -> Result<ApiRequest, ToolError>;

    /// Render the decoded response as Markdown.
    fn render(params: &Self::Params, response: Self::Response) -> String;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: Some(Self::EFFECT.annotations()),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, serde::Deserialize, JsonSchema)]
pub struct NoParams {}

/// Deserialize raw arguments into the tool's parameter type.
pub fn parse_params<T: ApiTool>(arguments: JsonObject) -> Result<T::Params, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))
}

/// Run a tool end to end against `executor`.
///
/// Exactly one executor call is made when the arguments are valid, none
/// otherwise.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn invoke<T: ApiTool>(
    executor: &dyn ApiExecutor,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    let params = parse_params::<T>(arguments)?;
    let request = T::request(&params)?;
    debug!(method = %request.method, path = %request.path, "Dispatching tool call");

    Ok(match execute::<T>(executor, request, &params).await {
        Ok(text) => success_result(text),
        Err(e) => error_result(&e.to_string()),
    })
}

/// Execute an already-built request and render the typed response.
pub async fn execute<T: ApiTool>(
    executor: &dyn ApiExecutor,
    request: ApiRequest,
    params: &T::Params,
) -> Result<String, ApiError> {
    let value = executor.execute(request).await?;
    let response: T::Response =
        serde_json::from_value(value).map_err(|e| ApiError::unexpected_shape(e.to_string()))?;
    Ok(T::render(params, response))
}

/// Validate an identifier that is interpolated into a request path.
pub fn path_segment<'a>(field: &str, value: &'a str) -> Result<&'a str, ToolError> {
    let forbidden = |c: char| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace();
    if value.is_empty() || value == "." || value == ".." || value.contains(forbidden) {
        return Err(ToolError::invalid_arguments(format!(
            "'{}' is not a valid {}",
            value, field
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment_accepts_ids_and_names() {
        assert_eq!(path_segment("app_id", "42").unwrap(), "42");
        assert_eq!(path_segment("app_id", "my-shop_v2").unwrap(), "my-shop_v2");
    }

    #[test]
    fn test_path_segment_rejects_traversal() {
        for bad in ["", ".", "..", "1/bugs", "1?x=2", "a b", "a#b", "%2F"] {
            assert!(
                matches!(path_segment("app_id", bad), Err(ToolError::InvalidArguments(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_effect_annotations() {
        let read = Effect::Read.annotations();
        assert_eq!(read.read_only_hint, Some(true));

        let delete = Effect::Destructive.annotations();
        assert_eq!(delete.destructive_hint, Some(true));
        assert_eq!(delete.read_only_hint, Some(false));

        let deploy = Effect::Write.annotations();
        assert_eq!(deploy.idempotent_hint, Some(false));
    }
}
