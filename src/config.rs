//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;
use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::{Result, ServiceError};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin.
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error) or full filter directive.
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log format: pretty or json.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    // === HTTP Surface ===
    /// `*` or a comma-separated list of allowed origins.
    #[serde(default = "default_cors_origins")]
    pub cors_allow_origins: String,

    /// Serve Swagger UI and the OpenAPI document.
    #[serde(default = "default_true")]
    pub enable_docs: bool,

    /// Install the Prometheus recorder and serve `/metrics`.
    #[serde(default = "default_true")]
    pub enable_metrics: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_cors_origins() -> String {
    "*".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rust_log: default_log_level(),
            log_format: default_log_format(),
            cors_allow_origins: default_cors_origins(),
            enable_docs: true,
            enable_metrics: true,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from `(NAME, value)` pairs, as found in the environment.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Validate, reporting failures as [`ServiceError::InvalidConfig`].
    pub fn ensure_valid(&self) -> Result<()> {
        self.validate().map_err(ServiceError::InvalidConfig)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if IpAddr::from_str(&self.host).is_err() {
            return Err(format!("HOST must be an IP address, got {:?}", self.host));
        }

        if LogFormat::from_str(&self.log_format).is_err() {
            return Err(format!(
                "LOG_FORMAT must be 'pretty' or 'json', got {:?}",
                self.log_format
            ));
        }

        self.cors_origins()?;

        Ok(())
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> std::result::Result<SocketAddr, String> {
        let ip = IpAddr::from_str(&self.host)
            .map_err(|e| format!("HOST {:?} is invalid: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Parsed log format, falling back to pretty.
    pub fn log_format(&self) -> LogFormat {
        LogFormat::from_str(&self.log_format).unwrap_or(LogFormat::Pretty)
    }

    /// Parsed CORS origin list.
    pub fn cors_origins(&self) -> std::result::Result<CorsOrigins, String> {
        let raw = self.cors_allow_origins.trim();
        if raw.is_empty() || raw == "*" {
            return Ok(CorsOrigins::Any);
        }

        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| format!("CORS_ALLOW_ORIGINS entry {:?} is not a valid origin", origin))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(CorsOrigins::List)
    }
}
