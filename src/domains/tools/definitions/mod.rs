//! Tool definitions module.
//!
//! One file per resource. Each tool is a unit struct implementing
//! [`ApiTool`](super::ApiTool); registration happens in `registry.rs`.

pub mod apps;
pub mod bugs;
pub mod catalog;
pub mod deployments;
pub mod operations;
pub mod servers;

use schemars::JsonSchema;
use serde::Deserialize;

pub use apps::{CreateAppTool, DeleteAppTool, GetAppTool, ListAppsTool, UpdateAppTool};
pub use bugs::{GetBugTool, IgnoreBugTool, ListBugsTool, ReopenBugTool, ResolveBugTool};
pub use catalog::{ListRegionsTool, ListSizesTool};
pub use deployments::{DeployAppTool, GetDeploymentTool, ListDeploymentsTool};
pub use operations::{GetAppLogsTool, RestartAppTool, RollbackAppTool};
pub use servers::{CreateServerTool, DeleteServerTool, GetServerTool, ListServersTool};

/// Parameters for tools addressing a single app.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AppIdParams {
    #[schemars(description = "The app ID or name")]
    pub app_id: String,
}
