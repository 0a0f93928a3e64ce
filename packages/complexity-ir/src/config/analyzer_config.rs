//! Runtime configuration
//!
//! Every field has a default, so a config file only needs `version: 1`.

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ServerExport, CONFIG_VERSION};
use crate::features::parsing::ports::Dialect;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Default HTTP bind address
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Default request body limit (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Upper bound accepted for `server.max_body_bytes` (64 MiB)
pub const MAX_BODY_BYTES_LIMIT: usize = 64 * 1024 * 1024;

/// Default deadline for receiving a complete request
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 30_000;

/// Upper bound accepted for `server.read_timeout_ms` (10 minutes)
pub const READ_TIMEOUT_MS_LIMIT: u64 = 600_000;

/// HTTP endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// `HOST:PORT` to bind
    pub addr: String,
    /// Requests with a larger body are rejected with 413
    pub max_body_bytes: usize,
    /// Connections that have not sent a complete request by then get 408
    pub read_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl ServerConfig {
    /// Parsed bind address
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        SocketAddr::from_str(&self.addr).map_err(|_| ConfigError::InvalidAddress(self.addr.clone()))
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerConfig {
    pub default_dialect: Dialect,
    pub fail_on_semantic_errors: bool,
    pub log_filter: String,
    pub server: ServerConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            default_dialect: Dialect::C,
            fail_on_semantic_errors: true,
            log_filter: "info".to_string(),
            server: ServerConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load and validate a YAML config file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Err(ConfigError::MissingVersion);
        }
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        match export.version {
            None => return Err(ConfigError::MissingVersion),
            Some(CONFIG_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![CONFIG_VERSION],
                })
            }
        }

        let mut config = Self::default();
        if let Some(name) = export.default_dialect {
            config.default_dialect =
                Dialect::from_str(&name).map_err(|_| ConfigError::UnknownDialect(name.clone()))?;
        }
        if let Some(fail) = export.fail_on_semantic_errors {
            config.fail_on_semantic_errors = fail;
        }
        if let Some(filter) = export.log_filter {
            config.log_filter = filter;
        }
        if let Some(server) = export.server {
            if let Some(addr) = server.addr {
                config.server.addr = addr;
            }
            if let Some(limit) = server.max_body_bytes {
                config.server.max_body_bytes = limit;
            }
            if let Some(timeout) = server.read_timeout_ms {
                config.server.read_timeout_ms = timeout;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as a complete v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(CONFIG_VERSION),
            default_dialect: Some(self.default_dialect.name().to_string()),
            fail_on_semantic_errors: Some(self.fail_on_semantic_errors),
            log_filter: Some(self.log_filter.clone()),
            server: Some(ServerExport {
                addr: Some(self.server.addr.clone()),
                max_body_bytes: Some(self.server.max_body_bytes),
                read_timeout_ms: Some(self.server.read_timeout_ms),
            }),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Range and format checks
    pub fn validate(&self) -> ConfigResult<()> {
        let limit = self.server.max_body_bytes;
        if limit == 0 || limit > MAX_BODY_BYTES_LIMIT {
            return Err(ConfigError::range_with_hint(
                "server.max_body_bytes",
                limit,
                1,
                MAX_BODY_BYTES_LIMIT,
                "Source files larger than a few MiB are not useful to analyze",
            ));
        }
        let timeout = self.server.read_timeout_ms;
        if timeout == 0 || timeout > READ_TIMEOUT_MS_LIMIT {
            return Err(ConfigError::range_with_hint(
                "server.read_timeout_ms",
                timeout,
                1,
                READ_TIMEOUT_MS_LIMIT,
                "Slow clients hold a connection task until the deadline",
            ));
        }
        self.server.socket_addr()?;
        Ok(())
    }
}
