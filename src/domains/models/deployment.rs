//! Deployment payloads.

use serde::Deserialize;

use super::{ResourceId, lenient};

/// One deployment of an app.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Deployment {
    #[serde(default, deserialize_with = "lenient::option")]
    pub id: Option<ResourceId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub commit_sha: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub commit_message: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub triggered_by: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub finished_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub duration_seconds: Option<f64>,
    /// Build/deploy output, only on single-deployment responses.
    #[serde(default, deserialize_with = "lenient::text")]
    pub output: Option<String>,
}

impl Deployment {
    /// First seven characters of the commit, as shown by git.
    pub fn short_sha(&self) -> Option<&str> {
        self.commit_sha
            .as_deref()
            .map(|sha| sha.get(..7).unwrap_or(sha))
    }
}

/// `GET /apps/{id}/deployments`
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentList {
    #[serde(default, deserialize_with = "lenient::list")]
    pub deployments: Vec<Deployment>,
}

/// Single-deployment responses (get, deploy, rollback).
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentEnvelope {
    #[serde(default, deserialize_with = "lenient::object")]
    pub deployment: Deployment,
}
