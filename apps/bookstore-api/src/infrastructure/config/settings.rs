//! Service Configuration Settings
//!
//! Configuration types for the bookstore service, loaded from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::infrastructure::telemetry::TelemetryConfig;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind address.
    pub host: IpAddr,
    /// HTTP port.
    pub http_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            http_port: 8080,
        }
    }
}

impl ServerSettings {
    /// Socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Whether to install the Prometheus recorder.
    pub metrics_enabled: bool,
    /// Tracing export settings.
    pub telemetry: TelemetryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            metrics_enabled: true,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a present variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerSettings::default();

        let host = match lookup("BOOKSTORE_HTTP_HOST") {
            Some(raw) => parse_value("BOOKSTORE_HTTP_HOST", &raw)?,
            None => defaults.host,
        };

        let http_port = match lookup("BOOKSTORE_HTTP_PORT") {
            Some(raw) => parse_value("BOOKSTORE_HTTP_PORT", &raw)?,
            None => defaults.http_port,
        };

        let metrics_enabled = lookup("BOOKSTORE_METRICS_ENABLED")
            .is_none_or(|v| !v.trim().eq_ignore_ascii_case("false"));

        Ok(Self {
            server: ServerSettings { host, http_port },
            metrics_enabled,
            telemetry: TelemetryConfig::from_lookup(&lookup),
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Raw value.
        value: String,
    },
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
