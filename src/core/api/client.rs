//! Authenticated HTTP executor for the Ship It Squirrel API.
//!
//! [`ApiClient`] performs exactly one request per call against
//! `{base_url}/api/v1{path}` and normalizes the outcome into either a decoded
//! JSON value or an [`ApiError`] carrying a single message. There is no retry,
//! caching or rate limiting at this layer.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use super::error::{ApiError, ApiResult};
use super::request::ApiRequest;
use crate::core::config::ApiConfig;
use crate::core::error::{Error, Result};

/// Versioned prefix every request path is appended to.
pub const API_PREFIX: &str = "/api/v1";

/// Something that can run an [`ApiRequest`].
///
/// Tool handlers only ever talk to the API through this trait.
#[async_trait]
pub trait ApiExecutor: Send + Sync {
    /// Perform the request and return the decoded JSON payload.
    async fn execute(&self, request: ApiRequest) -> ApiResult<Value>;
}

/// reqwest-backed [`ApiExecutor`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl ApiClient {
    /// Build a client from the startup configuration.
    ///
    /// Fails when the token cannot be carried in an HTTP header or the
    /// underlying HTTP client cannot be created.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|_| {
                Error::config("API token contains characters not allowed in an HTTP header")
            })?;
        authorization.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, authorization);
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_headers,
        })
    }

    /// Absolute URL for a path below the API prefix.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Default headers with the request's own headers layered on top.
    fn headers_for(&self, request: &ApiRequest) -> ApiResult<HeaderMap> {
        let mut headers = self.default_headers.clone();
        for (name, value) in &request.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::invalid_request(format!("Invalid header name: {}", name)))?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                ApiError::invalid_request(format!("Invalid value for header {}", name))
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Decode a success body. An empty body counts as an empty object.
    async fn decode_success(response: Response) -> ApiResult<Value> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Default::default()));
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::decode(e.to_string()))
    }

    /// Turn a failure response into a single-message error.
    async fn decode_failure(response: Response) -> ApiError {
        let status = response.status();
        let body = response.bytes().await.ok();

        let message = match body.and_then(|b| serde_json::from_slice::<Value>(&b).ok()) {
            Some(json) => json
                .get("error")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| generic_message(status)),
            None => status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| generic_message(status)),
        };

        ApiError::status(status.as_u16(), message)
    }
}

fn generic_message(status: StatusCode) -> String {
    format!("API error: {}", status.as_u16())
}

#[async_trait]
impl ApiExecutor for ApiClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: ApiRequest) -> ApiResult<Value> {
        if !request.path.starts_with('/') {
            return Err(ApiError::invalid_request(format!(
                "Path must start with '/': {}",
                request.path
            )));
        }

        let headers = self.headers_for(&request)?;
        let mut builder = self
            .http
            .request(request.method.clone(), self.url_for(&request.path))
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "API responded");

        if status.is_success() {
            Self::decode_success(response).await
        } else {
            Err(Self::decode_failure(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::assert_ok;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ApiConfig::new(server.uri(), "test-token")).unwrap()
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let client = ApiClient::new(&ApiConfig::new("https://example.com/", "t")).unwrap();
        assert_eq!(client.url_for("/apps"), "https://example.com/api/v1/apps");
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let result = ApiClient::new(&ApiConfig::new("https://example.com", "bad\ntoken"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_get_sends_auth_and_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/apps"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "apps": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let value = assert_ok!(client_for(&server).execute(ApiRequest::get("/apps")).await);
        assert_eq!(value, json!({ "apps": [] }));
    }

    #[tokio::test]
    async fn test_post_forwards_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/apps/7/bugs/3/resolve"))
            .and(body_json(json!({ "notes": "fixed in 1.2" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "bug": { "id": 3 } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::post("/apps/7/bugs/3/resolve")
            .with_body(json!({ "notes": "fixed in 1.2" }));
        let value = client_for(&server).execute(request).await.unwrap();
        assert_eq!(value["bug"]["id"], 3);
    }

    #[tokio::test]
    async fn test_query_string_reaches_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/apps/7/bugs"))
            .and(query_param("status", "open"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "bugs": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::get("/apps/7/bugs")
            .with_query(&[("status", "open")])
            .unwrap();
        assert_ok!(client_for(&server).execute(request).await);
    }

    #[tokio::test]
    async fn test_extra_header_overrides_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/apps/7/logs"))
            .and(header("content-type", "text/plain"))
            .and(header("x-request-source", "agent"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "logs": "" })))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::get("/apps/7/logs")
            .with_header("Content-Type", "text/plain")
            .with_header("X-Request-Source", "agent");
        assert_ok!(client_for(&server).execute(request).await);
    }

    #[tokio::test]
    async fn test_error_field_becomes_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/apps/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Not found" })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .execute(ApiRequest::get("/apps/missing"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not found");
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_non_json_failure_uses_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/servers"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .execute(ApiRequest::get("/servers"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[tokio::test]
    async fn test_json_failure_without_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/apps/7"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({ "errors": ["branch invalid"] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .execute(ApiRequest::patch("/apps/7").with_body(json!({ "branch": "" })))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API error: 422");
    }

    #[tokio::test]
    async fn test_empty_success_body_is_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/servers/4"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server)
            .execute(ApiRequest::delete("/servers/4"))
            .await
            .unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/regions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .execute(ApiRequest::get("/regions"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_relative_path_is_rejected_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .execute(ApiRequest::get("apps"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_transport_error() {
        let client = ApiClient::new(&ApiConfig::new("http://127.0.0.1:1", "t")).unwrap();
        let err = client.execute(ApiRequest::get("/apps")).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(err.to_string().starts_with("Request failed: "));
    }
}
