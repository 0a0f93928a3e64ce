//! Parsing domain models
//!
//! Tokens produced by the dialect lexers and the minimal loop/function tree
//! produced by the extractors.

mod ast;
mod token;

pub use ast::{Block, Function, Loop, LoopKind, Program, Statement, MAX_NESTING};
pub use token::{is_identifier, Lexeme, Token, TokenKind};
