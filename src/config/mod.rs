//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, then environment
//! overrides, then validation. Every field has a default, so an empty file
//! (or no file at all) is a valid configuration.
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 7071
//!   route: /api/httpTriggerCpf
//! logging:
//!   filter: info
//!   format: compact
//! ```

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable holding the path of the YAML config file
pub const CONFIG_PATH_ENV: &str = "CPF_CONFIG";

const HEALTH_ROUTES: [&str; 2] = ["/health", "/healthz"];

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,

    /// Path serving the CPF validation endpoint
    pub route: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7071,
            route: "/api/httpTriggerCpf".to_string(),
        }
    }
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue {
                field: "logging.format".to_string(),
                message: format!("unknown format '{}' (expected compact or json)", other),
            }),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Complete configuration of the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: HttpConfig,
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document, treat it as "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load, apply environment overrides and validate
    ///
    /// Without a path the defaults are used as the base.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CPF_HOST`, `CPF_PORT`, `CPF_ROUTE` and `CPF_LOG_FORMAT`
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CPF_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("CPF_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: format!("'{}' is not a valid port", port),
            })?;
        }

        if let Some(route) = lookup("CPF_ROUTE") {
            self.server.route = route;
        }

        if let Some(format) = lookup("CPF_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }

        Ok(())
    }

    /// Check values that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "must not be 0".to_string(),
            });
        }

        let route = &self.server.route;
        if !route.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "server.route".to_string(),
                message: format!("'{}' must start with '/'", route),
            });
        }

        if HEALTH_ROUTES.contains(&route.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "server.route".to_string(),
                message: format!("'{}' is reserved for health checks", route),
            });
        }

        Ok(())
    }

    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
