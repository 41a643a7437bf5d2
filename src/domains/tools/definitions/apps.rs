//! App lifecycle tools: list, inspect, create, update and delete apps.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AppIdParams;
use crate::core::api::ApiRequest;
use crate::domains::models::{Acknowledgement, App, AppEnvelope, AppList};
use crate::domains::tools::api_tool::{ApiTool, Effect, NoParams, path_segment};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::render::{display_or, text_or, text_or_na, with_unit, yes_no};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for creating an app.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAppParams {
    #[schemars(description = "Name of the new app")]
    pub name: String,

    #[schemars(description = "Git repository URL to deploy from")]
    pub repository: String,

    #[schemars(description = "ID of the server to host the app (optional)")]
    #[serde(default)]
    pub server_id: Option<String>,

    #[schemars(description = "Branch to deploy (optional, defaults to the repository default)")]
    #[serde(default)]
    pub branch: Option<String>,

    #[schemars(description = "Custom domain (optional)")]
    #[serde(default)]
    pub domain: Option<String>,

    #[schemars(description = "Deploy mode, e.g. auto or manual (optional)")]
    #[serde(default)]
    pub deploy_mode: Option<String>,

    #[schemars(description = "Rails master key for encrypted credentials (optional)")]
    #[serde(default)]
    pub rails_master_key: Option<String>,
}

/// Parameters for updating an app. Only the fields given are changed.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateAppParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(description = "New branch to deploy (optional)")]
    #[serde(default)]
    pub branch: Option<String>,

    #[schemars(description = "New custom domain (optional)")]
    #[serde(default)]
    pub domain: Option<String>,

    #[schemars(description = "New deploy mode, e.g. auto or manual (optional)")]
    #[serde(default)]
    pub deploy_mode: Option<String>,

    #[schemars(description = "New Rails master key (optional)")]
    #[serde(default)]
    pub rails_master_key: Option<String>,
}

// ============================================================================
// Request Bodies
// ============================================================================

/// `POST /apps` body. Absent optionals are left out entirely.
#[derive(Debug, Serialize)]
struct NewApp<'a> {
    name: &'a str,
    repository: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    server_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deploy_mode: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rails_master_key: Option<&'a str>,
}

/// `PATCH /apps/{id}` body. Absent optionals are left out entirely.
#[derive(Debug, Serialize)]
struct AppChanges<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deploy_mode: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rails_master_key: Option<&'a str>,
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub struct ListAppsTool;

impl ApiTool for ListAppsTool {
    const NAME: &'static str = "list_apps";
    const DESCRIPTION: &'static str =
        "List all your Ship It Squirrel apps with their status and bug counts";

    type Params = NoParams;
    type Response = AppList;

    fn request(_params: &NoParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("/apps"))
    }

    fn render(_params: &NoParams, response: AppList) -> String {
        if response.apps.is_empty() {
            return "No apps found.\n\nTotal: 0 apps".to_string();
        }

        let summary = response
            .apps
            .iter()
            .map(app_line)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "# Your Apps\n\n{}\n\nTotal: {} apps",
            summary,
            response.apps.len()
        )
    }
}

pub struct GetAppTool;

impl ApiTool for GetAppTool {
    const NAME: &'static str = "get_app";
    const DESCRIPTION: &'static str = "Get detailed information about a specific app";

    type Params = AppIdParams;
    type Response = AppEnvelope;

    fn request(params: &AppIdParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        Ok(ApiRequest::get(format!("/apps/{}", app_id)))
    }

    fn render(_params: &AppIdParams, response: AppEnvelope) -> String {
        let app = response.app;
        format!(
            "# {name}\n\n\
             {details}\n\n\
             ## Stats\n\
             - Open bugs: {bugs}\n\
             - Uptime (24h): {uptime}\n\
             - Avg response time: {response_time}\n\
             - Agent connected: {agent}\n\
             - Last deployed: {deployed}",
            name = text_or(app.name.as_deref(), "Unnamed app"),
            details = app_details(&app),
            bugs = display_or(app.open_bug_count, "0"),
            uptime = with_unit(app.uptime_percentage_24h, "%"),
            response_time = with_unit(app.avg_response_time_ms, "ms"),
            agent = yes_no(app.agent_connected),
            deployed = text_or(app.last_deployed_at.as_deref(), "Never"),
        )
    }
}

pub struct CreateAppTool;

impl ApiTool for CreateAppTool {
    const NAME: &'static str = "create_app";
    const DESCRIPTION: &'static str =
        "Create a new app from a git repository, optionally placing it on a server";
    const EFFECT: Effect = Effect::Write;

    type Params = CreateAppParams;
    type Response = AppEnvelope;

    fn request(params: &CreateAppParams) -> Result<ApiRequest, ToolError> {
        let body = NewApp {
            name: &params.name,
            repository: &params.repository,
            server_id: params.server_id.as_deref(),
            branch: params.branch.as_deref(),
            domain: params.domain.as_deref(),
            deploy_mode: params.deploy_mode.as_deref(),
            rails_master_key: params.rails_master_key.as_deref(),
        };
        Ok(ApiRequest::post("/apps").with_json(&body)?)
    }

    fn render(_params: &CreateAppParams, response: AppEnvelope) -> String {
        let app = response.app;
        format!(
            "App created: {}\n\n**ID:** {}\n{}",
            text_or(app.name.as_deref(), "Unnamed app"),
            display_or(app.id.as_ref(), "N/A"),
            app_details(&app)
        )
    }
}

pub struct UpdateAppTool;

impl ApiTool for UpdateAppTool {
    const NAME: &'static str = "update_app";
    const DESCRIPTION: &'static str =
        "Update an app's branch, domain, deploy mode or Rails master key. Only the given fields change";
    const EFFECT: Effect = Effect::Idempotent;

    type Params = UpdateAppParams;
    type Response = AppEnvelope;

    fn request(params: &UpdateAppParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        let body = AppChanges {
            branch: params.branch.as_deref(),
            domain: params.domain.as_deref(),
            deploy_mode: params.deploy_mode.as_deref(),
            rails_master_key: params.rails_master_key.as_deref(),
        };
        Ok(ApiRequest::patch(format!("/apps/{}", app_id)).with_json(&body)?)
    }

    fn render(_params: &UpdateAppParams, response: AppEnvelope) -> String {
        let app = response.app;
        format!(
            "App updated: {}\n\n{}",
            text_or(app.name.as_deref(), "Unnamed app"),
            app_details(&app)
        )
    }
}

pub struct DeleteAppTool;

impl ApiTool for DeleteAppTool {
    const NAME: &'static str = "delete_app";
    const DESCRIPTION: &'static str =
        "Permanently delete an app and its deployments. This cannot be undone";
    const EFFECT: Effect = Effect::Destructive;

    type Params = AppIdParams;
    type Response = Acknowledgement;

    fn request(params: &AppIdParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        Ok(ApiRequest::delete(format!("/apps/{}", app_id)))
    }

    fn render(params: &AppIdParams, response: Acknowledgement) -> String {
        match response.message.filter(|m| !m.is_empty()) {
            Some(message) => message,
            None => format!("App {} deleted.", params.app_id),
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn app_line(app: &App) -> String {
    let mut line = format!(
        "- {}: {} ({} open bugs)",
        text_or(app.name.as_deref(), "Unnamed app"),
        text_or(app.status.as_deref(), "unknown"),
        display_or(app.open_bug_count, "0")
    );
    if let Some(domain) = app.domain.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(" - ");
        line.push_str(domain);
    }
    line
}

fn app_details(app: &App) -> String {
    format!(
        "**Status:** {}\n**Server:** {}\n**Branch:** {}\n**Domain:** {}",
        text_or_na(app.status.as_deref()),
        text_or(app.server.as_deref(), "Not assigned"),
        text_or_na(app.branch.as_deref()),
        text_or(app.address(), "Not configured"),
    )
}
