//! Pipeline orchestration
//!
//! Source text → tokens → extraction tree → complexity + diagnostics.

pub mod processor;

pub use processor::*;
