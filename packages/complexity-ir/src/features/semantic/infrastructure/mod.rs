//! Semantic checker implementations

mod duplicate_checker;

pub use duplicate_checker::{check_semantics, DuplicateFunctionChecker};
