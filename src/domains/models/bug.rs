//! Bug (tracked exception) payloads.

use serde::Deserialize;
use serde_json::Value;

use super::{ResourceId, lenient};

/// A grouped application error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bug {
    #[serde(default, deserialize_with = "lenient::option")]
    pub id: Option<ResourceId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub error_class: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub occurrence_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_seen_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_seen_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::lines")]
    pub backtrace: Option<Vec<String>>,
    #[serde(default)]
    pub context: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub resolution_notes: Option<String>,
}

/// Per-status totals returned alongside a bug list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BugCounts {
    #[serde(default, deserialize_with = "lenient::total")]
    pub open: u64,
    #[serde(default, deserialize_with = "lenient::total")]
    pub resolved: u64,
    #[serde(default, deserialize_with = "lenient::total")]
    pub ignored: u64,
}

/// `GET /apps/{id}/bugs`
#[derive(Debug, Clone, Deserialize)]
pub struct BugList {
    #[serde(default, deserialize_with = "lenient::list")]
    pub bugs: Vec<Bug>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub counts: BugCounts,
}

/// Single-bug responses (get, resolve, ignore, reopen).
#[derive(Debug, Clone, Deserialize)]
pub struct BugEnvelope {
    #[serde(default, deserialize_with = "lenient::object")]
    pub bug: Bug,
}
