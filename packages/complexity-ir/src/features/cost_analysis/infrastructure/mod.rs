//! Infrastructure layer for cost analysis

pub mod analyzer;
pub mod bound_classifier;

pub use analyzer::CostAnalyzer;
pub use bound_classifier::{BoundClassifier, UpdateKind};
