//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! routing paths, response headers, logging and default paths. `AppConfig` is
//! the root configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Routing
// =============================================================================

/// Path the liveness probe is mounted at
pub const HEALTHCHECK_PATH: &str = "/healthcheck";

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Health responses must always reflect the live process, never a cached copy
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

/// Header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address
pub const DEFAULT_LISTEN_ADDR: &str = formatcp!("{}:{}", DEFAULT_HOST, DEFAULT_PORT);

/// Seconds to wait for in-flight connections after a shutdown signal
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

/// Environment variable that overrides `http.port`
pub const PORT_ENV_VAR: &str = "PORT";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "publishing_api=info,tower_http=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Graceful shutdown window in seconds (default: 30)
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    /// Resolve host and port into a bindable socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port ({}:{}): {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> LogFormat {
        LogFormat::Text
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// When `optional` is set and the file does not exist, built-in defaults are
    /// used instead. This lets the binary start without a config file at the
    /// default path while still failing loudly on an explicit `--config`.
    pub fn load<P: AsRef<Path>>(path: P, optional: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if optional && !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            AppConfig::default()
        } else {
            Self::from_toml(&std::fs::read_to_string(path)?)?
        };

        config.apply_env_overrides(std::env::var(PORT_ENV_VAR).ok().as_deref())?;
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from a TOML string without touching the environment
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_env_overrides(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        if let Some(port) = port {
            self.http.port = port.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("{} must be a port number, got {:?}", PORT_ENV_VAR, port))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
