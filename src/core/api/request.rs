//! Outbound request description for the Ship It Squirrel API.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};

/// A single call against the versioned API.
///
/// The path is relative to `/api/v1` and may carry an already encoded query
/// string. Requests are built by tool definitions and consumed immediately by
/// an [`ApiExecutor`](super::ApiExecutor).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method, `GET` unless stated otherwise.
    pub method: Method,

    /// Path below the API prefix, always starting with `/`.
    pub path: String,

    /// Optional JSON body.
    pub body: Option<Value>,

    /// Extra headers, applied after (and overriding) the defaults.
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a request with an explicit method.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a JSON body serialized from `payload`.
    ///
    /// Optional fields skipped by the payload's `Serialize` impl stay absent
    /// from the body.
    pub fn with_json<T: Serialize>(self, payload: &T) -> ApiResult<Self> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ApiError::invalid_request(format!("Unserializable body: {}", e)))?;
        Ok(self.with_body(body))
    }

    /// Append URL-encoded query parameters to the path.
    ///
    /// Does nothing when `params` is empty, so optional filters can be
    /// collected unconditionally.
    pub fn with_query<T: Serialize>(mut self, params: &T) -> ApiResult<Self> {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| ApiError::invalid_request(format!("Unencodable query: {}", e)))?;
        if !query.is_empty() {
            let separator = if self.path.contains('?') { '&' } else { '?' };
            self.path.push(separator);
            self.path.push_str(&query);
        }
        Ok(self)
    }

    /// Add an extra header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
