//! Dialect plugins
//!
//! Each dialect has its own plugin implementing the SourceParser trait.
//! Plugins are stateless, so one static instance per dialect serves every
//! caller.

pub mod c;
pub mod python;

pub use c::CPlugin;
pub use python::PythonPlugin;

use crate::features::parsing::ports::{Dialect, SourceParser};

static C_PLUGIN: CPlugin = CPlugin;
static PYTHON_PLUGIN: PythonPlugin = PythonPlugin;

/// Parser for a dialect
pub fn parser_for(dialect: Dialect) -> &'static dyn SourceParser {
    match dialect {
        Dialect::C => &C_PLUGIN,
        Dialect::Python => &PYTHON_PLUGIN,
    }
}
