//! Processor entry points
//!
//! Everything here except `process_file` is total: any input, however
//! malformed, yields a result (possibly `O(?)`).

use super::language::resolve_dialect;
use super::types::AnalysisReport;
use crate::errors::Result;
use crate::features::cost_analysis::application::{CostAnalysisUseCase, CostAnalysisUseCaseImpl};
use crate::features::cost_analysis::domain::Complexity;
use crate::features::cost_analysis::infrastructure::CostAnalyzer;
use crate::features::parsing::domain::Program;
use crate::features::parsing::plugins::parser_for;
use crate::features::parsing::ports::{Dialect, SourceParser};
use std::path::Path;

pub use crate::features::semantic::check_semantics;

/// Source text → worst-case complexity
pub fn analyze_source(text: &str, dialect: Dialect) -> Complexity {
    CostAnalysisUseCaseImpl::new().analyze_cost(text, dialect)
}

/// Source text → extraction tree
pub fn parse_source(text: &str, dialect: Dialect) -> Program {
    parser_for(dialect).parse(text)
}

/// Extract once, then run both the analyzer and the semantic checker
pub fn process_source(text: &str, dialect: Dialect) -> AnalysisReport {
    let program = parse_source(text, dialect);
    let complexity = CostAnalyzer::new().analyze_program(&program);
    let errors = check_semantics(&program);

    tracing::info!(
        dialect = dialect.name(),
        complexity = %complexity,
        errors = errors.len(),
        "analysis complete"
    );

    AnalysisReport {
        path: None,
        dialect,
        complexity,
        loop_count: program.loop_count(),
        function_count: program.function_count(),
        errors,
    }
}

/// Read a file and process it. The dialect is `explicit` if given, else taken
/// from the extension, else `default`.
pub fn process_file(path: &Path, explicit: Option<Dialect>, default: Dialect) -> Result<AnalysisReport> {
    let text = std::fs::read_to_string(path)?;
    let dialect = resolve_dialect(explicit, Some(path), default);
    tracing::debug!(path = %path.display(), dialect = dialect.name(), bytes = text.len(), "processing file");
    Ok(process_source(&text, dialect).with_path(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ComplexityError;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_process_source_report() {
        let src = "int f() { for (i = 0; i < n; i++) { for (j = 0; j < n; j++) {} } }\nint f() { }";
        let report = process_source(src, Dialect::C);
        assert_eq!(report.complexity.to_string(), "O(n^2)");
        assert_eq!(report.loop_count, 2);
        assert_eq!(report.function_count, 2);
        assert_eq!(report.errors, vec!["Duplicate function name: f".to_string()]);
    }

    #[test]
    fn test_analyze_source_matches_report() {
        let src = "i = 1\nwhile i < n:\n    i *= 2\n";
        assert_eq!(
            analyze_source(src, Dialect::Python),
            process_source(src, Dialect::Python).complexity
        );
    }

    #[test]
    fn test_process_file_uses_extension() {
        let mut file = tempfile::Builder::new().suffix(".py").tempfile().unwrap();
        file.write_all(b"for i in range(n):\n    pass\n").unwrap();

        let report = process_file(file.path(), None, Dialect::C).unwrap();
        assert_eq!(report.dialect, Dialect::Python);
        assert_eq!(report.complexity.to_string(), "O(n)");
        assert!(report.path.is_some());
    }

    #[test]
    fn test_process_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = process_file(&dir.path().join("absent.c"), None, Dialect::C);
        assert!(matches!(result, Err(ComplexityError::Io(_))));
    }

    #[test]
    fn test_process_file_explicit_dialect() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"while (i < n) { i += 1; }").unwrap();
        let report = process_file(file.path(), Some(Dialect::C), Dialect::Python).unwrap();
        assert_eq!(report.dialect, Dialect::C);
        assert_eq!(report.complexity.to_string(), "O(n)");
    }
}
