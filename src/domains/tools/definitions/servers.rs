//! Server lifecycle tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::models::{Acknowledgement, Server, ServerEnvelope, ServerList};
use crate::domains::tools::api_tool::{ApiTool, Effect, NoParams, path_segment};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::render::{display_or, join_blocks, text_or, text_or_na};

/// Parameters for tools addressing one server.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServerIdParams {
    #[schemars(description = "The server ID")]
    pub server_id: String,
}

/// Parameters for provisioning a server.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateServerParams {
    #[schemars(description = "Name of the new server")]
    pub name: String,

    #[schemars(description = "Region slug, see list_regions (optional)")]
    #[serde(default)]
    pub region: Option<String>,

    #[schemars(description = "Size slug, see list_sizes (optional)")]
    #[serde(default)]
    pub size: Option<String>,
}

#[derive(Debug, Serialize)]
struct NewServer<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<&'a str>,
}

pub struct ListServersTool;

impl ApiTool for ListServersTool {
    const NAME: &'static str = "list_servers";
    const DESCRIPTION: &'static str = "List all your servers with their status, region and size";

    type Params = NoParams;
    type Response = ServerList;

    fn request(_params: &NoParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("/servers"))
    }

    fn render(_params: &NoParams, response: ServerList) -> String {
        if response.servers.is_empty() {
            return "No servers found.".to_string();
        }

        let count = response.servers.len();
        let blocks = join_blocks(response.servers.iter().map(server_block));
        format!("# Your Servers\n\n{}\n\nTotal: {} servers", blocks, count)
    }
}

pub struct GetServerTool;

impl ApiTool for GetServerTool {
    const NAME: &'static str = "get_server";
    const DESCRIPTION: &'static str = "Get detailed information about a specific server";

    type Params = ServerIdParams;
    type Response = ServerEnvelope;

    fn request(params: &ServerIdParams) -> Result<ApiRequest, ToolError> {
        let server_id = path_segment("server_id", &params.server_id)?;
        Ok(ApiRequest::get(format!("/servers/{}", server_id)))
    }

    fn render(_params: &ServerIdParams, response: ServerEnvelope) -> String {
        let server = response.server;
        format!(
            "# {}\n\n{}\n**Created:** {}",
            text_or(server.name.as_deref(), "Unnamed server"),
            server_fields(&server),
            text_or_na(server.created_at.as_deref())
        )
    }
}

pub struct CreateServerTool;

impl ApiTool for CreateServerTool {
    const NAME: &'static str = "create_server";
    const DESCRIPTION: &'static str =
        "Provision a new server. Use list_regions and list_sizes to pick a region and size";
    const EFFECT: Effect = Effect::Write;

    type Params = CreateServerParams;
    type Response = ServerEnvelope;

    fn request(params: &CreateServerParams) -> Result<ApiRequest, ToolError> {
        let body = NewServer {
            name: &params.name,
            region: params.region.as_deref(),
            size: params.size.as_deref(),
        };
        Ok(ApiRequest::post("/servers").with_json(&body)?)
    }

    fn render(_params: &CreateServerParams, response: ServerEnvelope) -> String {
        let server = response.server;
        format!(
            "Server created: {}\n\n{}\n\nProvisioning can take a few minutes; check progress with get_server.",
            text_or(server.name.as_deref(), "Unnamed server"),
            server_fields(&server)
        )
    }
}

pub struct DeleteServerTool;

impl ApiTool for DeleteServerTool {
    const NAME: &'static str = "delete_server";
    const DESCRIPTION: &'static str =
        "Permanently delete a server and destroy its droplet. This cannot be undone";
    const EFFECT: Effect = Effect::Destructive;

    type Params = ServerIdParams;
    type Response = Acknowledgement;

    fn request(params: &ServerIdParams) -> Result<ApiRequest, ToolError> {
        let server_id = path_segment("server_id", &params.server_id)?;
        Ok(ApiRequest::delete(format!("/servers/{}", server_id)))
    }

    fn render(params: &ServerIdParams, response: Acknowledgement) -> String {
        match response.message.filter(|m| !m.is_empty()) {
            Some(message) => message,
            None => format!("Server {} deleted.", params.server_id),
        }
    }
}

fn server_fields(server: &Server) -> String {
    format!(
        "**ID:** {}\n**Status:** {}\n**IP:** {}\n**Region:** {} | **Size:** {}\n**Apps:** {}",
        display_or(server.id.as_ref(), "N/A"),
        text_or_na(server.status.as_deref()),
        text_or(server.ip_address.as_deref(), "Not assigned"),
        text_or_na(server.region.as_deref()),
        text_or_na(server.size.as_deref()),
        display_or(server.app_count, "0"),
    )
}

fn server_block(server: &Server) -> String {
    format!(
        "## {}\n{}",
        text_or(server.name.as_deref(), "Unnamed server"),
        server_fields(server)
    )
}
