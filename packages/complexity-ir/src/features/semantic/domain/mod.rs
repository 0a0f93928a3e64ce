//! Semantic diagnostics

mod error;

pub use error::SemanticError;
