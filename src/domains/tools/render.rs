//! Common rendering utilities shared across tool definitions.
//!
//! Renderers never print `null` or an empty value: anything missing from a
//! decoded payload goes through one of the placeholder helpers below.

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Generic placeholder for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Separator between per-item blocks in list output.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// The value, or `placeholder` when it is missing or blank.
pub fn text_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}

/// Shorthand for [`text_or`] with [`NOT_AVAILABLE`].
pub fn text_or_na(value: Option<&str>) -> &str {
    text_or(value, NOT_AVAILABLE)
}

/// Display the value, or `placeholder` when missing.
pub fn display_or<T: Display>(value: Option<T>, placeholder: &str) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// Display the value with a unit suffix (`99.9%`, `120ms`), or `N/A`.
pub fn with_unit<T: Display>(value: Option<T>, unit: &str) -> String {
    value
        .map(|v| format!("{}{}", v, unit))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `Yes` only for an explicit `true`.
pub fn yes_no(value: Option<bool>) -> &'static str {
    if value.unwrap_or(false) { "Yes" } else { "No" }
}

/// Join per-item blocks with [`BLOCK_SEPARATOR`].
pub fn join_blocks<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks.into_iter().collect::<Vec<_>>().join(BLOCK_SEPARATOR)
}

/// The first `limit` lines, newline-joined.
pub fn first_lines(lines: &[String], limit: usize) -> String {
    lines
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
