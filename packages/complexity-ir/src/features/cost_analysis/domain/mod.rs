//! Domain models for cost analysis
//!
//! Pure values with no parsing or I/O dependencies.

mod bound;
mod complexity;

pub use bound::LoopBound;
pub use complexity::{Complexity, Exponent};
