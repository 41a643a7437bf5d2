//! Deployment tools: history, details and triggering a deploy.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AppIdParams;
use crate::core::api::ApiRequest;
use crate::domains::models::{Deployment, DeploymentEnvelope, DeploymentList};
use crate::domains::tools::api_tool::{ApiTool, Effect, path_segment};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::render::{display_or, join_blocks, text_or, text_or_na, with_unit};

/// Parameters addressing one deployment of an app.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeploymentParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(description = "The deployment ID")]
    pub deployment_id: String,
}

/// Parameters for triggering a deployment.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeployAppParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(description = "Branch to deploy instead of the app's configured branch (optional)")]
    #[serde(default)]
    pub branch: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeployOptions<'a> {
    branch: &'a str,
}

pub struct ListDeploymentsTool;

impl ApiTool for ListDeploymentsTool {
    const NAME: &'static str = "list_deployments";
    const DESCRIPTION: &'static str = "List recent deployments for a specific app";

    type Params = AppIdParams;
    type Response = DeploymentList;

    fn request(params: &AppIdParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        Ok(ApiRequest::get(format!("/apps/{}/deployments", app_id)))
    }

    fn render(_params: &AppIdParams, response: DeploymentList) -> String {
        if response.deployments.is_empty() {
            return "No deployments found for this app.".to_string();
        }

        let blocks = join_blocks(response.deployments.iter().map(deployment_block));
        format!(
            "# Deployments ({})\n\n{}",
            response.deployments.len(),
            blocks
        )
    }
}

pub struct GetDeploymentTool;

impl ApiTool for GetDeploymentTool {
    const NAME: &'static str = "get_deployment";
    const DESCRIPTION: &'static str =
        "Get detailed information about a specific deployment including its output";

    type Params = DeploymentParams;
    type Response = DeploymentEnvelope;

    fn request(params: &DeploymentParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        let deployment_id = path_segment("deployment_id", &params.deployment_id)?;
        Ok(ApiRequest::get(format!(
            "/apps/{}/deployments/{}",
            app_id, deployment_id
        )))
    }

    fn render(_params: &DeploymentParams, response: DeploymentEnvelope) -> String {
        let deployment = response.deployment;
        let output = deployment
            .output
            .as_deref()
            .filter(|o| !o.trim().is_empty())
            .unwrap_or("No output available");

        format!(
            "{}\n\n## Output\n```\n{}\n```",
            deployment_block(&deployment),
            output
        )
    }
}

pub struct DeployAppTool;

impl ApiTool for DeployAppTool {
    const NAME: &'static str = "deploy_app";
    const DESCRIPTION: &'static str =
        "Trigger a new deployment of an app, optionally from a specific branch";
    const EFFECT: Effect = Effect::Write;

    type Params = DeployAppParams;
    type Response = DeploymentEnvelope;

    fn request(params: &DeployAppParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        let request = ApiRequest::post(format!("/apps/{}/deploy", app_id));
        match params.branch.as_deref().filter(|b| !b.is_empty()) {
            Some(branch) => Ok(request.with_json(&DeployOptions { branch })?),
            None => Ok(request),
        }
    }

    fn render(_params: &DeployAppParams, response: DeploymentEnvelope) -> String {
        format!(
            "Deployment started.\n\n{}",
            deployment_block(&response.deployment)
        )
    }
}

/// One deployment as a Markdown block. Shared with the rollback tool.
pub(super) fn deployment_block(deployment: &Deployment) -> String {
    let commit = match (deployment.short_sha(), deployment.commit_message.as_deref()) {
        (Some(sha), Some(message)) if !message.is_empty() => {
            let subject = message.lines().next().unwrap_or(message);
            format!("{} {}", sha, subject)
        }
        (Some(sha), _) => sha.to_string(),
        (None, _) => "N/A".to_string(),
    };

    format!(
        "## Deployment {}\n\
         **Status:** {} | **Branch:** {}\n\
         **Commit:** {}\n\
         **Triggered by:** {}\n\
         **Started:** {} | **Finished:** {}\n\
         **Duration:** {}",
        display_or(deployment.id.as_ref(), "N/A"),
        text_or_na(deployment.status.as_deref()),
        text_or_na(deployment.branch.as_deref()),
        commit,
        text_or(deployment.triggered_by.as_deref(), "Unknown"),
        text_or_na(deployment.created_at.as_deref()),
        text_or(deployment.finished_at.as_deref(), "Not finished"),
        with_unit(deployment.duration_seconds, "s"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::RecordingExecutor;
    use crate::domains::tools::testing::{call, text};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_deployments_empty() {
        let executor = RecordingExecutor::replying(json!({ "deployments": [] }));
        let result = call::<ListDeploymentsTool>(&executor, json!({ "app_id": "7" }))
            .await
            .unwrap();

        assert_eq!(text(&result), "No deployments found for this app.");
        assert_eq!(executor.single_request().path, "/apps/7/deployments");
    }

    #[tokio::test]
    async fn test_list_deployments_blocks() {
        let executor = RecordingExecutor::replying(json!({
            "deployments": [
                {
                    "id": 31, "status": "succeeded", "branch": "main",
                    "commit_sha": "a1b2c3d4e5f6", "commit_message": "Fix checkout\n\nLong body",
                    "triggered_by": "alice", "created_at": "2026-10-01T10:00:00Z",
                    "finished_at": "2026-10-01T10:03:00Z", "duration_seconds": 180
                },
                { "id": 30, "status": "running" }
            ]
        }));
        let result = call::<ListDeploymentsTool>(&executor, json!({ "app_id": "7" }))
            .await
            .unwrap();

        let output = text(&result);
        assert!(output.starts_with("# Deployments (2)"));
        assert!(output.contains("**Commit:** a1b2c3d Fix checkout\n"));
        assert!(output.contains("**Duration:** 180s"));
        assert!(output.contains("## Deployment 30\n**Status:** running | **Branch:** N/A"));
        assert!(output.contains("**Finished:** Not finished"));
        assert!(output.contains("**Triggered by:** Unknown"));
    }

    #[tokio::test]
    async fn test_get_deployment_output() {
        let executor = RecordingExecutor::replying(json!({
            "deployment": { "id": 31, "status": "failed", "output": "bundle install\nerror: boom" }
        }));
        let result = call::<GetDeploymentTool>(
            &executor,
            json!({ "app_id": "7", "deployment_id": "31" }),
        )
        .await
        .unwrap();

        assert!(text(&result).ends_with("## Output\n```\nbundle install\nerror: boom\n```"));
        assert_eq!(executor.single_request().path, "/apps/7/deployments/31");
    }

    #[tokio::test]
    async fn test_deploy_app_without_branch_has_no_body() {
        let executor = RecordingExecutor::replying(json!({
            "deployment": { "id": 32, "status": "queued" }
        }));
        let result = call::<DeployAppTool>(&executor, json!({ "app_id": "7" }))
            .await
            .unwrap();

        let request = executor.single_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/apps/7/deploy");
        assert_eq!(request.body, None);
        assert!(text(&result).starts_with("Deployment started."));
    }

    #[tokio::test]
    async fn test_deploy_app_with_branch() {
        let executor = RecordingExecutor::replying(json!({ "deployment": { "id": 33 } }));
        call::<DeployAppTool>(&executor, json!({ "app_id": "7", "branch": "release" }))
            .await
            .unwrap();

        assert_eq!(
            executor.single_request().body,
            Some(json!({ "branch": "release" }))
        );
    }

    #[tokio::test]
    async fn test_list_deployments_fractional_duration() {
        let executor = RecordingExecutor::replying(json!({
            "deployments": [{ "id": 34, "status": "succeeded", "duration_seconds": 42.5 }]
        }));
        let result = call::<ListDeploymentsTool>(&executor, json!({ "app_id": "7" }))
            .await
            .unwrap();

        assert!(result.is_error != Some(true));
        assert!(text(&result).contains("**Duration:** 42.5s"));
    }
}
