//! Server (droplet) payloads.

use serde::Deserialize;

use super::{ResourceId, lenient};

/// A provisioned server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Server {
    #[serde(default, deserialize_with = "lenient::option")]
    pub id: Option<ResourceId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ip_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub app_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

/// `GET /servers`
#[derive(Debug, Clone, Deserialize)]
pub struct ServerList {
    #[serde(default, deserialize_with = "lenient::list")]
    pub servers: Vec<Server>,
}

/// Single-server responses (`GET`/`POST`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerEnvelope {
    #[serde(default, deserialize_with = "lenient::object")]
    pub server: Server,
}
