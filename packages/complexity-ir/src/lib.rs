/*
 * Complexity IR - Loop-Based Time Complexity Estimator
 *
 * Feature-First Hexagonal Architecture:
 * - features/    : Vertical slices (parsing → cost_analysis, semantic)
 * - pipeline/    : Entry points composing the slices
 * - config/      : Versioned YAML configuration
 * - server/      : Minimal HTTP endpoint
 *
 * The analysis core is total: every input yields a complexity, possibly
 * O(?), and never an error.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Feature modules (parsing, cost analysis, semantic checks)
pub mod features;

/// Pipeline entry points
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

/// HTTP endpoint
pub mod server;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{AnalyzerConfig, ConfigError};
pub use errors::{ComplexityError, Result};
pub use features::cost_analysis::{Complexity, Exponent, LoopBound};
pub use features::parsing::{Dialect, Program};
pub use pipeline::{
    analyze_source, check_semantics, parse_source, process_file, process_source, AnalysisReport,
};
