//! Cost Analysis UseCase

use crate::features::cost_analysis::domain::Complexity;
use crate::features::cost_analysis::infrastructure::CostAnalyzer;
use crate::features::parsing::plugins::parser_for;
use crate::features::parsing::ports::{Dialect, SourceParser};

/// Cost Analysis UseCase Trait
pub trait CostAnalysisUseCase: Send + Sync {
    /// Source text → worst-case growth class. Never fails: unparseable input
    /// degrades to `O(1)` or `O(?)`.
    fn analyze_cost(&self, code: &str, dialect: Dialect) -> Complexity;
}

/// Cost Analysis UseCase Implementation
#[derive(Debug, Default)]
pub struct CostAnalysisUseCaseImpl {
    analyzer: CostAnalyzer,
}

impl CostAnalysisUseCaseImpl {
    pub fn new() -> Self {
        Self {
            analyzer: CostAnalyzer::new(),
        }
    }
}

impl CostAnalysisUseCase for CostAnalysisUseCaseImpl {
    fn analyze_cost(&self, code: &str, dialect: Dialect) -> Complexity {
        let program = parser_for(dialect).parse(code);
        self.analyzer.analyze_program(&program)
    }
}
