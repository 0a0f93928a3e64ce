//! Supported source dialects

use crate::errors::ComplexityError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Dialect identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Brace-delimited C-like dialect
    C,
    /// Indentation-sensitive Python-like dialect
    Python,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::C, Dialect::Python];

    /// Get dialect name as string
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::C => "c",
            Dialect::Python => "python",
        }
    }

    /// Get dialect from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" => Some(Dialect::C),
            "py" | "pyi" => Some(Dialect::Python),
            _ => None,
        }
    }

    /// Get dialect from a file path's extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Dialect::C => &["c", "h", "cc", "cpp", "cxx", "hpp"],
            Dialect::Python => &["py", "pyi"],
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::C
    }
}

impl FromStr for Dialect {
    type Err = ComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "c-like" | "cpp" | "c++" => Ok(Dialect::C),
            "python" | "py" | "python-like" => Ok(Dialect::Python),
            _ => Err(ComplexityError::UnsupportedDialect(s.to_string())),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
