use super::complexity::{Complexity, Exponent};
use serde::{Deserialize, Serialize};

/// Heuristic iteration-growth category of a single loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopBound {
    /// Literal trip count. Reserved: no heuristic produces it yet.
    Constant,
    /// Step by addition/subtraction against a variable bound
    Linear,
    /// Step by multiplication/division
    Logarithmic,
    /// Linear step against a squared bound (`i * i < n`)
    Sqrt,
    /// Unclassifiable
    Unknown,
}

impl LoopBound {
    /// Growth contributed by one loop of this category
    pub fn base_complexity(self) -> Complexity {
        match self {
            Self::Constant => Complexity::constant(),
            Self::Linear => Complexity::polylog(Exponent::ONE, 0),
            Self::Logarithmic => Complexity::polylog(Exponent::ZERO, 1),
            Self::Sqrt => Complexity::polylog(Exponent::HALF, 0),
            Self::Unknown => Complexity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::Sqrt => "sqrt",
            Self::Unknown => "unknown",
        }
    }
}

impl From<LoopBound> for Complexity {
    fn from(bound: LoopBound) -> Self {
        bound.base_complexity()
    }
}

impl std::fmt::Display for LoopBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
