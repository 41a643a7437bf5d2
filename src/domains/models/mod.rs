//! Typed views of the Ship It Squirrel API payloads.
//!
//! Every field the API may omit is an `Option`, so payloads are decoded once
//! and renderers decide on placeholders instead of probing raw JSON.
//! Unknown fields are ignored.

mod app;
mod bug;
mod catalog;
mod deployment;
mod lenient;
mod server;

pub use app::{App, AppEnvelope, AppList};
pub use bug::{Bug, BugCounts, BugEnvelope, BugList};
pub use catalog::{Region, RegionList, Size, SizeList};
pub use deployment::{Deployment, DeploymentEnvelope, DeploymentList};
pub use server::{Server, ServerEnvelope, ServerList};

use serde::Deserialize;
use std::fmt;

/// Identifier as returned by the API, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Acknowledgement body of action endpoints (delete, restart).
///
/// Such endpoints may answer with an empty body, which decodes as `{}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Acknowledgement {
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: Option<String>,
}

/// Log output, either one blob or a list of lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LogOutput {
    Lines(Vec<String>),
    Text(String),
}

impl LogOutput {
    /// The log as a single newline-joined string.
    pub fn joined(&self) -> String {
        match self {
            Self::Lines(lines) => lines.join("\n"),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Body of the logs endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AppLogs {
    #[serde(default, deserialize_with = "lenient::option")]
    pub logs: Option<LogOutput>,
}
