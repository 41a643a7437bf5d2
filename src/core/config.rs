//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (a
//! `.env` file is honoured) and then passed around by value. Nothing below
//! the entry point reads the process environment.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Environment variable holding the Ship It Squirrel API token.
pub const API_TOKEN_VAR: &str = "SHIPITSQUIRREL_API_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "SHIPITSQUIRREL_URL";

/// Base URL used when `SHIPITSQUIRREL_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://shipitsquirrel.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Remote API location and credential.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Ship It Squirrel API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without the `/api/v1` prefix.
    pub base_url: String,

    /// Bearer token sent with every request.
    pub api_token: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "shipitsquirrel".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when `SHIPITSQUIRREL_API_TOKEN` is missing or empty; the server
    /// must not start without a credential.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup(API_TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                Error::config(format!("{} environment variable is required", API_TOKEN_VAR))
            })?;

        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut server = ServerConfig::default();
        if let Some(name) = lookup("MCP_SERVER_NAME") {
            server.name = name;
        }

        let mut logging = LoggingConfig::default();
        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        Ok(Self {
            server,
            logging,
            api: ApiConfig::new(base_url, api_token),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[]));
        match result {
            Err(Error::Config(msg)) => {
                assert_eq!(msg, "SHIPITSQUIRREL_API_TOKEN environment variable is required")
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_token_is_fatal() {
        let result = Config::from_lookup(lookup_from(&[(API_TOKEN_VAR, "  ")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_default_base_url() {
        let config = Config::from_lookup(lookup_from(&[(API_TOKEN_VAR, "tok")])).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.api_token, "tok");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            (API_TOKEN_VAR, "tok"),
            (BASE_URL_VAR, "http://localhost:3000"),
            ("MCP_SERVER_NAME", "squirrel-dev"),
            ("MCP_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.server.name, "squirrel-dev");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_api_token_redacted_in_debug() {
        let api = ApiConfig::new("https://example.com", "super_secret_token");
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
