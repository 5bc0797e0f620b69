//! Bind address and CORS policy for the bookshelf server.
//!
//! Every field has a default, so a config file may name any subset of them.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Where the bookshelf listens and which browser origins it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host name or IP, resolved when the listener binds. Loopback by default.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed origins. Empty admits every origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9000
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Loopback bind on `port`
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port`, as handed to the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }

    /// Configured origins that are valid header values; the rest are skipped.
    pub fn origin_headers(&self) -> Vec<HeaderValue> {
        self.cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }

    /// CORS layer for the book and health routes. Any method and header is
    /// allowed; only the origin is restricted.
    pub fn cors_layer(&self) -> CorsLayer {
        let origin = if self.allows_any_origin() {
            AllowOrigin::from(Any)
        } else {
            AllowOrigin::list(self.origin_headers())
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_loopback_with_open_cors() {
        let config = HttpServerConfig::default();
        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_with_port() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 5000}"#).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_origin_list_skips_invalid_entries() {
        let config = HttpServerConfig {
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "bad\norigin".to_string(),
            ],
            ..Default::default()
        };

        assert!(!config.allows_any_origin());
        assert_eq!(
            config.origin_headers(),
            vec![HeaderValue::from_static("http://localhost:5173")]
        );
    }
}
