//! Cost Analyzer
//!
//! Folds an extraction tree into a single growth class.
//!
//! Algorithm:
//! 1. Block → `max` over every statement, starting from O(1)
//! 2. Function → its body (call sites are not modeled)
//! 3. Loop → `multiply(base(bound), body)`
//!
//! Blocks nested deeper than [`MAX_NESTING`] fold to `Unknown`.

use crate::features::cost_analysis::domain::Complexity;
use crate::features::parsing::domain::{Block, Loop, Program, Statement, MAX_NESTING};

/// Cost Analyzer
///
/// Responsibilities:
/// - Nesting composition (multiply)
/// - Sequential composition (max)
///
/// NOT Responsible For:
/// - Extraction (dialect extractors)
/// - Loop bound classification (BoundClassifier)
#[derive(Debug, Clone, Copy, Default)]
pub struct CostAnalyzer;

impl CostAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_program(&self, program: &Program) -> Complexity {
        let complexity = self.analyze_block(&program.body);
        tracing::debug!(%complexity, "program analyzed");
        complexity
    }

    /// Visits every statement; `Unknown` does not short-circuit the fold.
    pub fn analyze_block(&self, block: &Block) -> Complexity {
        self.fold_block(block, 0)
    }

    pub fn analyze_statement(&self, stmt: &Statement) -> Complexity {
        self.fold_statement(stmt, 0)
    }

    pub fn analyze_loop(&self, lp: &Loop) -> Complexity {
        self.fold_loop(lp, 0)
    }

    fn fold_block(&self, block: &Block, depth: usize) -> Complexity {
        if depth > MAX_NESTING && !block.is_empty() {
            tracing::debug!(depth, "nesting limit reached during analysis");
            return Complexity::Unknown;
        }
        block
            .statements
            .iter()
            .fold(Complexity::constant(), |acc, stmt| {
                acc.max(self.fold_statement(stmt, depth))
            })
    }

    fn fold_statement(&self, stmt: &Statement, depth: usize) -> Complexity {
        match stmt {
            Statement::Function(func) => self.fold_block(&func.body, depth + 1),
            Statement::Loop(lp) => self.fold_loop(lp, depth),
        }
    }

    fn fold_loop(&self, lp: &Loop, depth: usize) -> Complexity {
        lp.bound
            .base_complexity()
            .multiply(self.fold_block(&lp.body, depth + 1))
    }
}
