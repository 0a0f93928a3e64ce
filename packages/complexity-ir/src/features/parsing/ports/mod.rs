//! Parsing ports (interfaces)

mod dialect;
mod parser;

pub use dialect::Dialect;
pub use parser::SourceParser;
