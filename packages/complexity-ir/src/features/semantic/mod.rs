/*
 * Semantic Checks
 *
 * Independent diagnostics over the extraction tree. Never mutates the tree
 * and never changes the computed complexity; callers decide whether to report
 * diagnostics instead of, or alongside, the result.
 *
 * Architecture:
 * - Domain: SemanticError
 * - Infrastructure: DuplicateFunctionChecker
 */

pub mod domain;
pub mod infrastructure;

pub use domain::SemanticError;
pub use infrastructure::{check_semantics, DuplicateFunctionChecker};
