//! Error types for complexity-ir
//!
//! The analysis core is total and never returns these; they cover the edges
//! around it (files, configuration, dialect selection, serving).

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for complexity-ir operations
#[derive(Debug, Error)]
pub enum ComplexityError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dialect name or file extension not recognized
    #[error("Unsupported dialect '{0}'. Valid dialects: c, python")]
    UnsupportedDialect(String),

    /// Semantic diagnostics reported for an input
    #[error("{count} semantic error(s) in {source_name}")]
    Semantic { source_name: String, count: usize },

    /// HTTP endpoint error
    #[error("Server error: {0}")]
    Server(String),
}

impl ComplexityError {
    /// Create a server error
    pub fn server(msg: impl Into<String>) -> Self {
        ComplexityError::Server(msg.into())
    }
}

/// Result type alias for complexity-ir operations
pub type Result<T> = std::result::Result<T, ComplexityError>;
