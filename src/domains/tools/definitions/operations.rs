//! Operational actions on a running app: restart, rollback and logs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AppIdParams;
use super::deployments::deployment_block;
use crate::core::api::ApiRequest;
use crate::domains::models::{Acknowledgement, AppLogs, DeploymentEnvelope};
use crate::domains::tools::api_tool::{ApiTool, Effect, path_segment};
use crate::domains::tools::error::ToolError;

/// Default number of log lines requested.
pub fn default_log_lines() -> u32 {
    100
}

/// Clamp the requested line count to the allowed range (1-1000).
pub fn validate_log_lines(lines: u32) -> u32 {
    lines.clamp(1, 1000)
}

/// Parameters for a rollback.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollbackAppParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(
        description = "Deployment to roll back to (optional, defaults to the previous successful deployment)"
    )]
    #[serde(default)]
    pub deployment_id: Option<String>,
}

/// Parameters for fetching logs.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AppLogsParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(description = "Number of recent log lines (default: 100, max: 1000)")]
    #[serde(default = "default_log_lines")]
    pub lines: u32,
}

#[derive(Debug, Serialize)]
struct RollbackTarget<'a> {
    deployment_id: &'a str,
}

pub struct RestartAppTool;

impl ApiTool for RestartAppTool {
    const NAME: &'static str = "restart_app";
    const DESCRIPTION: &'static str = "Restart an app's processes without redeploying";
    const EFFECT: Effect = Effect::Write;

    type Params = AppIdParams;
    type Response = Acknowledgement;

    fn request(params: &AppIdParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        Ok(ApiRequest::post(format!("/apps/{}/restart", app_id)))
    }

    fn render(params: &AppIdParams, response: Acknowledgement) -> String {
        match response.message.filter(|m| !m.is_empty()) {
            Some(message) => message,
            None => format!("Restart requested for app {}.", params.app_id),
        }
    }
}

pub struct RollbackAppTool;

impl ApiTool for RollbackAppTool {
    const NAME: &'static str = "rollback_app";
    const DESCRIPTION: &'static str =
        "Roll an app back to a previous deployment (the last successful one unless specified)";
    const EFFECT: Effect = Effect::Write;

    type Params = RollbackAppParams;
    type Response = DeploymentEnvelope;

    fn request(params: &RollbackAppParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        let request = ApiRequest::post(format!("/apps/{}/rollback", app_id));
        match params.deployment_id.as_deref() {
            Some(deployment_id) => {
                let deployment_id = path_segment("deployment_id", deployment_id)?;
                Ok(request.with_json(&RollbackTarget { deployment_id })?)
            }
            None => Ok(request),
        }
    }

    fn render(_params: &RollbackAppParams, response: DeploymentEnvelope) -> String {
        format!(
            "Rollback started.\n\n{}",
            deployment_block(&response.deployment)
        )
    }
}

pub struct GetAppLogsTool;

impl ApiTool for GetAppLogsTool {
    const NAME: &'static str = "get_app_logs";
    const DESCRIPTION: &'static str = "Fetch recent log output for an app";

    type Params = AppLogsParams;
    type Response = AppLogs;

    fn request(params: &AppLogsParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        let lines = validate_log_lines(params.lines);
        Ok(ApiRequest::get(format!("/apps/{}/logs", app_id)).with_query(&[("lines", lines)])?)
    }

    fn render(params: &AppLogsParams, response: AppLogs) -> String {
        let logs = response
            .logs
            .map(|logs| logs.joined())
            .filter(|logs| !logs.trim().is_empty());

        match logs {
            Some(logs) => format!("# Logs for {}\n\n```\n{}\n```", params.app_id, logs),
            None => "No logs available for this app.".to_string(),
        }
    }
}
