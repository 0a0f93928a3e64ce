//! C-like Dialect Plugin
//!
//! Implements SourceParser for brace-delimited C-like source.

use crate::features::parsing::domain::Program;
use crate::features::parsing::infrastructure::{c_extractor, c_lexer};
use crate::features::parsing::ports::{Dialect, SourceParser};

/// C-like dialect plugin
#[derive(Debug, Clone, Copy, Default)]
pub struct CPlugin;

impl CPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for CPlugin {
    fn parse(&self, source: &str) -> Program {
        let tokens = c_lexer::tokenize(source);
        let program = c_extractor::extract(&tokens);
        tracing::debug!(
            tokens = tokens.len(),
            loops = program.loop_count(),
            functions = program.function_count(),
            "parsed C-like source"
        );
        program
    }

    fn dialect(&self) -> Dialect {
        Dialect::C
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts() {
        let src = r#"
            int sum(int n) {
                int total = 0;
                for (int i = 0; i < n; i++) {
                    total += i;
                }
                return total;
            }
        "#;
        let program = CPlugin::new().parse(src);
        assert_eq!(program.function_count(), 1);
        assert_eq!(program.loop_count(), 1);
    }
}
