//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - Implementations

pub mod parsing;

// Loop-bound classification and big-O composition
pub mod cost_analysis;

// Duplicate-definition diagnostics over the extraction tree
pub mod semantic;
