//! Parsing Feature
//!
//! Turns source text into the minimal loop/function tree the cost analysis
//! folds over.
//!
//! ## Structure
//! - `domain/` - Token, Program/Block/Statement models
//! - `ports/` - SourceParser trait, Dialect
//! - `infrastructure/` - lexers, cursor, structural extractors
//! - `plugins/` - one SourceParser per dialect (C-like, Python-like)

pub mod domain;
pub mod infrastructure;
pub mod plugins;
pub mod ports;

// Re-exports
pub use domain::{Block, Function, Loop, LoopKind, Program, Statement, Token, TokenKind};
pub use plugins::{parser_for, CPlugin, PythonPlugin};
pub use ports::{Dialect, SourceParser};
