//! Application layer for cost analysis

mod cost_usecase;

pub use cost_usecase::{CostAnalysisUseCase, CostAnalysisUseCaseImpl};
