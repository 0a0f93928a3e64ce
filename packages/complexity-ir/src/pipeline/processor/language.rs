//! Dialect resolution
//!
//! Explicit choice first, then the file extension, then the configured
//! default.

use crate::features::parsing::ports::Dialect;
use std::path::Path;

pub fn resolve_dialect(explicit: Option<Dialect>, path: Option<&Path>, default: Dialect) -> Dialect {
    explicit
        .or_else(|| path.and_then(Dialect::from_path))
        .unwrap_or(default)
}
