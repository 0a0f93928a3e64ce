//! Duplicate function detection
//!
//! One pre-order traversal with a set of seen names. Every repeat occurrence
//! after the first yields one diagnostic; loops are descended into but never
//! flagged themselves.

use crate::features::parsing::domain::{Program, Statement};
use crate::features::semantic::domain::SemanticError;
use std::collections::HashSet;

/// Flags function names defined more than once
#[derive(Debug, Default)]
pub struct DuplicateFunctionChecker;

impl DuplicateFunctionChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, program: &Program) -> Vec<SemanticError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut errors = Vec::new();

        program.body.walk(&mut |stmt| {
            if let Statement::Function(func) = stmt {
                if !seen.insert(func.name.as_str()) {
                    tracing::warn!(name = %func.name, "duplicate function name");
                    errors.push(SemanticError::DuplicateFunction {
                        name: func.name.clone(),
                    });
                }
            }
        });

        errors
    }
}

/// Human-readable diagnostics for a program, in traversal order
pub fn check_semantics(program: &Program) -> Vec<String> {
    DuplicateFunctionChecker::new()
        .check(program)
        .iter()
        .map(ToString::to_string)
        .collect()
}
