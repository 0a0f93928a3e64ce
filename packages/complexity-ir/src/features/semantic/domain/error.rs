/*
 * Semantic Diagnostics
 *
 * Collected as values, never raised.
 */

use serde::Serialize;
use thiserror::Error;

/// A semantic problem found in an extraction tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SemanticError {
    /// A function name defined more than once anywhere in the program
    #[error("Duplicate function name: {name}")]
    DuplicateFunction { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SemanticError::DuplicateFunction {
            name: "solve".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate function name: solve");
    }
}
