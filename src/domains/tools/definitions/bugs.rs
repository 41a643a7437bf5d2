//! Bug tracking tools.
//!
//! Bugs are grouped exceptions reported by an app's agent. They can be
//! listed, inspected with their backtrace, and moved between the `open`,
//! `resolved` and `ignored` states. State changes are sent as-is: the API
//! decides whether a transition is allowed or already in effect.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::api::ApiRequest;
use crate::domains::models::{Bug, BugEnvelope, BugList};
use crate::domains::tools::api_tool::{ApiTool, Effect, path_segment};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::render::{display_or, first_lines, join_blocks, text_or, text_or_na};

/// Backtrace lines shown by `get_bug`.
pub const BACKTRACE_LINES: usize = 15;

// ============================================================================
// Tool Parameters
// ============================================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListBugsParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(description = "Filter by status: open, resolved, or ignored (optional)")]
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BugParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(description = "The bug ID")]
    pub bug_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ResolveBugParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(description = "The bug ID")]
    pub bug_id: String,

    #[schemars(description = "Optional resolution notes")]
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IgnoreBugParams {
    #[schemars(description = "The app ID")]
    pub app_id: String,

    #[schemars(description = "The bug ID")]
    pub bug_id: String,

    #[schemars(description = "Optional notes explaining why it's being ignored")]
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
struct Notes<'a> {
    notes: &'a str,
}

/// `POST /apps/{app}/bugs/{bug}/{action}`, with `{notes}` only when notes
/// are non-empty.
fn bug_action(
    app_id: &str,
    bug_id: &str,
    action: &str,
    notes: Option<&str>,
) -> Result<ApiRequest, ToolError> {
    let app_id = path_segment("app_id", app_id)?;
    let bug_id = path_segment("bug_id", bug_id)?;
    let request = ApiRequest::post(format!("/apps/{}/bugs/{}/{}", app_id, bug_id, action));
    match notes.filter(|n| !n.is_empty()) {
        Some(notes) => Ok(request.with_json(&Notes { notes })?),
        None => Ok(request),
    }
}

fn error_class(bug: &Bug) -> &str {
    text_or(bug.error_class.as_deref(), "Unknown error")
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub struct ListBugsTool;

impl ApiTool for ListBugsTool {
    const NAME: &'static str = "list_bugs";
    const DESCRIPTION: &'static str = "List bugs for a specific app, optionally filtered by status";

    type Params = ListBugsParams;
    type Response = BugList;

    fn request(params: &ListBugsParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        let filter: Vec<(&str, &str)> = params
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|status| ("status", status))
            .into_iter()
            .collect();
        Ok(ApiRequest::get(format!("/apps/{}/bugs", app_id)).with_query(&filter)?)
    }

    fn render(params: &ListBugsParams, response: BugList) -> String {
        if response.bugs.is_empty() {
            return match params.status.as_deref().filter(|s| !s.is_empty()) {
                Some(status) => format!("No {} bugs found for this app.", status),
                None => "No bugs found for this app.".to_string(),
            };
        }

        let counts = &response.counts;
        let bug_list = join_blocks(response.bugs.iter().map(bug_block));
        format!(
            "# Bugs ({} open, {} resolved, {} ignored)\n\n{}",
            counts.open, counts.resolved, counts.ignored, bug_list
        )
    }
}

pub struct GetBugTool;

impl ApiTool for GetBugTool {
    const NAME: &'static str = "get_bug";
    const DESCRIPTION: &'static str =
        "Get detailed information about a specific bug including backtrace";

    type Params = BugParams;
    type Response = BugEnvelope;

    fn request(params: &BugParams) -> Result<ApiRequest, ToolError> {
        let app_id = path_segment("app_id", &params.app_id)?;
        let bug_id = path_segment("bug_id", &params.bug_id)?;
        Ok(ApiRequest::get(format!("/apps/{}/bugs/{}", app_id, bug_id)))
    }

    fn render(_params: &BugParams, response: BugEnvelope) -> String {
        let bug = response.bug;

        let backtrace = bug
            .backtrace
            .as_deref()
            .filter(|lines| !lines.is_empty())
            .map(|lines| first_lines(lines, BACKTRACE_LINES))
            .unwrap_or_else(|| "No backtrace available".to_string());

        let context = bug
            .context
            .as_ref()
            .and_then(|c| serde_json::to_string_pretty(c).ok())
            .unwrap_or_else(|| "No context".to_string());

        let mut text = format!(
            "# {class}\n\n\
             **Message:** {message}\n\
             **Status:** {status}\n\
             **Occurrences:** {occurrences}\n\
             **First seen:** {first_seen}\n\
             **Last seen:** {last_seen}\n\n\
             ## Backtrace (first {limit} lines)\n\
             ```\n{backtrace}\n```\n\n\
             ## Context\n\
             ```json\n{context}\n```",
            class = error_class(&bug),
            message = text_or_na(bug.message.as_deref()),
            status = text_or_na(bug.status.as_deref()),
            occurrences = display_or(bug.occurrence_count, "0"),
            first_seen = text_or_na(bug.first_seen_at.as_deref()),
            last_seen = text_or_na(bug.last_seen_at.as_deref()),
            limit = BACKTRACE_LINES,
            backtrace = backtrace,
            context = context,
        );

        if let Some(notes) = bug.resolution_notes.as_deref().filter(|n| !n.is_empty()) {
            text.push_str("\n\n## Resolution Notes\n");
            text.push_str(notes);
        }

        text
    }
}

pub struct ResolveBugTool;

impl ApiTool for ResolveBugTool {
    const NAME: &'static str = "resolve_bug";
    const DESCRIPTION: &'static str = "Mark a bug as resolved";
    const EFFECT: Effect = Effect::Idempotent;

    type Params = ResolveBugParams;
    type Response = BugEnvelope;

    fn request(params: &ResolveBugParams) -> Result<ApiRequest, ToolError> {
        bug_action(
            &params.app_id,
            &params.bug_id,
            "resolve",
            params.notes.as_deref(),
        )
    }

    fn render(_params: &ResolveBugParams, response: BugEnvelope) -> String {
        format!(
            "Bug resolved: {}\n\nThe bug has been marked as resolved.",
            error_class(&response.bug)
        )
    }
}

pub struct IgnoreBugTool;

impl ApiTool for IgnoreBugTool {
    const NAME: &'static str = "ignore_bug";
    const DESCRIPTION: &'static str = "Mark a bug as ignored (won't show in open bugs)";
    const EFFECT: Effect = Effect::Idempotent;

    type Params = IgnoreBugParams;
    type Response = BugEnvelope;

    fn request(params: &IgnoreBugParams) -> Result<ApiRequest, ToolError> {
        bug_action(
            &params.app_id,
            &params.bug_id,
            "ignore",
            params.notes.as_deref(),
        )
    }

    fn render(_params: &IgnoreBugParams, response: BugEnvelope) -> String {
        format!(
            "Bug ignored: {}\n\nThe bug has been marked as ignored.",
            error_class(&response.bug)
        )
    }
}

pub struct ReopenBugTool;

impl ApiTool for ReopenBugTool {
    const NAME: &'static str = "reopen_bug";
    const DESCRIPTION: &'static str = "Reopen a previously resolved or ignored bug";
    const EFFECT: Effect = Effect::Idempotent;

    type Params = BugParams;
    type Response = BugEnvelope;

    fn request(params: &BugParams) -> Result<ApiRequest, ToolError> {
        bug_action(&params.app_id, &params.bug_id, "reopen", None)
    }

    fn render(_params: &BugParams, response: BugEnvelope) -> String {
        format!(
            "Bug reopened: {}\n\nThe bug is now open again.",
            error_class(&response.bug)
        )
    }
}

fn bug_block(bug: &Bug) -> String {
    format!(
        "## {}\n\
         **Message:** {}\n\
         **Status:** {} | **Occurrences:** {}\n\
         **First seen:** {} | **Last seen:** {}\n\
         **ID:** {}\n\
         ---",
        error_class(bug),
        text_or_na(bug.message.as_deref()),
        text_or_na(bug.status.as_deref()),
        display_or(bug.occurrence_count, "0"),
        text_or_na(bug.first_seen_at.as_deref()),
        text_or_na(bug.last_seen_at.as_deref()),
        display_or(bug.id.as_ref(), "N/A"),
    )
}
