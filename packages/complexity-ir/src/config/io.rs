//! Configuration I/O (YAML schema)
//!
//! Defines the on-disk schema. Conversion to and from the runtime
//! [`AnalyzerConfig`](super::AnalyzerConfig) lives in `analyzer_config.rs`.

use serde::{Deserialize, Serialize};

/// Current schema version
pub const CONFIG_VERSION: u32 = 1;

/// YAML Schema v1
///
/// `version` is optional here only so a missing field can be reported as
/// `MissingVersion` rather than a generic YAML error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Dialect used when neither a flag nor a file extension decides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_dialect: Option<String>,

    /// Exit non-zero / withhold the result when semantic errors are found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_semantic_errors: Option<bool>,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,

    /// HTTP endpoint settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerExport>,
}

/// `server:` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_body_bytes: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_timeout_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ConfigExportV1, _> = serde_yaml::from_str("version: 1\npreset: fast\n");
        assert!(result.is_err());

        let result: Result<ConfigExportV1, _> =
            serde_yaml::from_str("version: 1\nserver:\n  port: 80\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_all_fields_optional() {
        let export: ConfigExportV1 = serde_yaml::from_str("version: 1\n").unwrap();
        assert_eq!(export.version, Some(1));
        assert!(export.default_dialect.is_none());
        assert!(export.server.is_none());
    }
}
