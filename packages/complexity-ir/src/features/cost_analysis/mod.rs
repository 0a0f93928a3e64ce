//! Cost Analysis
//!
//! Estimates the asymptotic running time of a program by:
//! - Classifying each loop's bound from syntactic cues
//! - Multiplying bounds along nesting
//! - Taking the maximum across sequential statements
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer                            │
//! │  - LoopBound (per-loop category)        │
//! │  - Complexity (n^(p/q) (log n)^k | ?)   │
//! └─────────────────────────────────────────┘
//!                   ▲
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - BoundClassifier (loop headers)       │
//! │  - CostAnalyzer (tree fold)             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use complexity_ir::features::cost_analysis::CostAnalyzer;
//!
//! let complexity = CostAnalyzer::new().analyze_program(&program);
//! println!("Complexity: {}", complexity);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CostAnalysisUseCase, CostAnalysisUseCaseImpl};

pub use domain::{Complexity, Exponent, LoopBound};

pub use infrastructure::{BoundClassifier, CostAnalyzer};
