//! Parser port (interface)
//!
//! Defines the contract for turning source text into an extraction tree.

use crate::features::parsing::domain::Program;
use crate::features::parsing::ports::Dialect;

/// Source parser - one implementation per dialect
///
/// Parsing is total: malformed input yields a (possibly empty) tree, never an
/// error.
pub trait SourceParser: Send + Sync {
    /// Tokenize and extract
    fn parse(&self, source: &str) -> Program;

    /// Dialect handled by this parser
    fn dialect(&self) -> Dialect;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool {
        Dialect::from_extension(ext) == Some(self.dialect())
    }
}
