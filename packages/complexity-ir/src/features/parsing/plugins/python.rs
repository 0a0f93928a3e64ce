//! Python-like Dialect Plugin
//!
//! Implements SourceParser for indentation-sensitive Python-like source.

use crate::features::parsing::domain::Program;
use crate::features::parsing::infrastructure::{python_extractor, python_lexer};
use crate::features::parsing::ports::{Dialect, SourceParser};

/// Python-like dialect plugin
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonPlugin;

impl PythonPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for PythonPlugin {
    fn parse(&self, source: &str) -> Program {
        let tokens = python_lexer::tokenize(source);
        let program = python_extractor::extract(&tokens);
        tracing::debug!(
            tokens = tokens.len(),
            loops = program.loop_count(),
            functions = program.function_count(),
            "parsed Python-like source"
        );
        program
    }

    fn dialect(&self) -> Dialect {
        Dialect::Python
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts() {
        let src = "def f(n):\n    i = 1\n    while i < n:\n        i *= 2\n\ndef g():\n    pass\n";
        let program = PythonPlugin::new().parse(src);
        assert_eq!(program.function_count(), 2);
        assert_eq!(program.loop_count(), 1);
    }
}
