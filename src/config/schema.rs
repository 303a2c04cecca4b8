//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// HTTP server settings (`server.*`).
    pub server: ServerConfig,

    /// Logging and metrics settings (`observability.*`).
    pub observability: ObservabilityConfig,
}

/// HTTP server settings, as written in the config file.
///
/// Values stay strings here; [`ServerSettings`](crate::config::ServerSettings)
/// holds the validated form.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// Listen address, e.g. `":8080"` or `"127.0.0.1:9000"`.
    pub port: String,

    /// Time allowed to read the request, e.g. `"1m"`. Zero or negative
    /// disables it.
    ///
    /// Bounds the request body on every protocol. Header reads are only
    /// bounded on HTTP/1 connections; HTTP/2 has no header read timeout.
    pub read_timeout: String,

    /// Time allowed to produce the response, e.g. `"1m"`. Zero or negative
    /// disables it.
    pub write_timeout: String,
}

pub const DEFAULT_PORT: &str = ":8080";
pub const DEFAULT_TIMEOUT: &str = "1m";

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            read_timeout: DEFAULT_TIMEOUT.to_string(),
            write_timeout: DEFAULT_TIMEOUT.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.server.port, ":8080");
        assert_eq!(config.server.read_timeout, "1m");
        assert_eq!(config.server.write_timeout, "1m");
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_camel_case_keys() {
        let config: RouterConfig = toml::from_str(
            r#"
            [server]
            port = ":9000"
            readTimeout = "5m"
            writeTimeout = "10m"

            [observability]
            logLevel = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, ":9000");
        assert_eq!(config.server.read_timeout, "5m");
        assert_eq!(config.server.write_timeout, "10m");
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.metrics_address, "0.0.0.0:9090");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: RouterConfig = toml::from_str("[server]\nreadTimeout = \"30s\"\n").unwrap();
        assert_eq!(config.server.port, ":8080");
        assert_eq!(config.server.read_timeout, "30s");
        assert_eq!(config.server.write_timeout, "1m");
    }
}
