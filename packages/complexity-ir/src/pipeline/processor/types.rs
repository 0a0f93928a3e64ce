//! Analysis result type

use crate::features::cost_analysis::domain::Complexity;
use crate::features::parsing::ports::Dialect;
use serde::Serialize;

/// Result of analyzing one source
///
/// `complexity` serializes as its rendered string (`"O(n log n)"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Input file, when the source came from one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub dialect: Dialect,
    pub complexity: Complexity,
    pub loop_count: usize,
    pub function_count: usize,
    /// Semantic diagnostics; never affect `complexity`
    pub errors: Vec<String>,
}

impl AnalysisReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}
