//! App payloads.

use serde::Deserialize;

use super::{ResourceId, lenient};

/// A deployed application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct App {
    #[serde(default, deserialize_with = "lenient::option")]
    pub id: Option<ResourceId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    /// Name of the server the app runs on.
    #[serde(default, deserialize_with = "lenient::text")]
    pub server: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub branch: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub preview_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub deploy_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub open_bug_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub uptime_percentage_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub avg_response_time_ms: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub agent_connected: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_deployed_at: Option<String>,
}

impl App {
    /// Public address: the custom domain, else the preview URL.
    pub fn address(&self) -> Option<&str> {
        self.domain
            .as_deref()
            .filter(|d| !d.is_empty())
            .or_else(|| self.preview_url.as_deref().filter(|u| !u.is_empty()))
    }
}

/// `GET /apps`
#[derive(Debug, Clone, Deserialize)]
pub struct AppList {
    #[serde(default, deserialize_with = "lenient::list")]
    pub apps: Vec<App>,
}

/// Single-app responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AppEnvelope {
    #[serde(default, deserialize_with = "lenient::object")]
    pub app: App,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_prefers_domain() {
        let app = App {
            domain: Some("shop.example.com".into()),
            preview_url: Some("https://shop.preview.dev".into()),
            ..Default::default()
        };
        assert_eq!(app.address(), Some("shop.example.com"));
    }

    #[test]
    fn test_address_skips_empty_domain() {
        let app = App {
            domain: Some(String::new()),
            preview_url: Some("https://shop.preview.dev".into()),
            ..Default::default()
        };
        assert_eq!(app.address(), Some("https://shop.preview.dev"));
        assert_eq!(App::default().address(), None);
    }

    #[test]
    fn test_decimal_strings_decode() {
        let envelope: AppEnvelope = serde_json::from_value(json!({
            "app": { "uptime_percentage_24h": "99.95", "avg_response_time_ms": "120.5" }
        }))
        .unwrap();
        assert_eq!(envelope.app.uptime_percentage_24h, Some(99.95));
        assert_eq!(envelope.app.avg_response_time_ms, Some(120.5));
    }

    #[test]
    fn test_null_collections_and_envelopes() {
        let list: AppList = serde_json::from_value(json!({ "apps": null })).unwrap();
        assert!(list.apps.is_empty());

        let envelope: AppEnvelope = serde_json::from_value(json!({ "app": null })).unwrap();
        assert!(envelope.app.name.is_none());
    }
}
