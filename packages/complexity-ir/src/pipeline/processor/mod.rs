//! Processor module
//!
//! # Module Organization
//!
//! - `types`: AnalysisReport
//! - `language`: dialect resolution for files
//! - `main`: entry points (`analyze_source`, `process_source`, `process_file`)

pub mod language;
mod main;
pub mod types;

// Re-export types for convenience
pub use types::AnalysisReport;

// Re-export dialect resolution
pub use language::resolve_dialect;

// Re-export main entry points
pub use main::{analyze_source, check_semantics, parse_source, process_file, process_source};
