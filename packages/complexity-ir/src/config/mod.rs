//! Configuration
//!
//! Defaults cover every field; a versioned YAML file overrides them.
//!
//! # Examples
//!
//! ```rust,ignore
//! use complexity_ir::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::from_yaml("tca.yaml")?;
//! println!("{}", config.to_yaml()?);
//! ```

pub mod analyzer_config;
pub mod error;
pub mod io;

// Re-exports
pub use analyzer_config::{AnalyzerConfig, ServerConfig};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ServerExport, CONFIG_VERSION};
