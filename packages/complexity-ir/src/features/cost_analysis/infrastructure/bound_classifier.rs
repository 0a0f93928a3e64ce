//! Loop Bound Classifier
//!
//! Shallow syntactic proxy for a loop's trip count. Nothing is executed or
//! simulated: the classifier only looks at the controlling condition and at
//! how the controlling variable is updated.
//!
//! Supported patterns:
//! 1. `for (init; cond; update)` → update multiplies/divides → LOGARITHMIC,
//!    condition squares a variable (`i * i < n`) → SQRT, condition mentions a
//!    variable → LINEAR
//! 2. `while (cond) { ... }` → first update of the condition variable in the
//!    body decides: `++ -- += -=` → LINEAR (SQRT with a squared condition on
//!    the same variable), `*= /=` → LOGARITHMIC
//! 3. `for x in range(...)` → LINEAR
//!
//! Anything else is UNKNOWN: a false "unknown" is preferred over false
//! precision.

use crate::features::cost_analysis::domain::LoopBound;
use crate::features::parsing::domain::{is_identifier, Lexeme};

const COMPARATORS: [&str; 6] = ["<", ">", "<=", ">=", "==", "!="];

/// How a loop body changes its controlling variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Increment,
    Decrement,
    Multiply,
    Divide,
}

impl UpdateKind {
    fn from_compound(op: &str) -> Option<Self> {
        match op {
            "++" | "+=" => Some(Self::Increment),
            "--" | "-=" => Some(Self::Decrement),
            "*=" => Some(Self::Multiply),
            "/=" | "//=" => Some(Self::Divide),
            _ => None,
        }
    }

    fn from_binary(op: &str) -> Option<Self> {
        match op {
            "+" => Some(Self::Increment),
            "-" => Some(Self::Decrement),
            "*" => Some(Self::Multiply),
            "/" | "//" => Some(Self::Divide),
            _ => None,
        }
    }

    fn is_additive(&self) -> bool {
        matches!(self, Self::Increment | Self::Decrement)
    }
}

/// Stateless loop-bound classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundClassifier;

impl BoundClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a C-style `for (init; cond; update)` header
    pub fn classify_for<L: Lexeme>(&self, cond: &[L], update: &[L]) -> LoopBound {
        let bound = if is_scaling_update(update) {
            LoopBound::Logarithmic
        } else if is_squared_condition(cond, None) {
            LoopBound::Sqrt
        } else if condition_variable(cond).is_some() {
            LoopBound::Linear
        } else {
            LoopBound::Unknown
        };

        tracing::debug!(
            var = condition_variable(cond).unwrap_or("-"),
            bound = bound.as_str(),
            "classified for-loop"
        );
        bound
    }

    /// Classify a `while` loop from its condition and the flat token span of
    /// its body
    pub fn classify_while<L: Lexeme>(&self, cond: &[L], body: &[L]) -> LoopBound {
        let Some(var) = condition_variable(cond) else {
            tracing::debug!(bound = "unknown", "while-loop condition has no variable");
            return LoopBound::Unknown;
        };

        let bound = match find_update(body, var) {
            Some(update) if update.is_additive() => {
                if is_squared_condition(cond, Some(var)) {
                    LoopBound::Sqrt
                } else {
                    LoopBound::Linear
                }
            }
            Some(_) => LoopBound::Logarithmic,
            None => LoopBound::Unknown,
        };

        tracing::debug!(var, bound = bound.as_str(), "classified while-loop");
        bound
    }

    /// Classify a `for <target> in <source>` loop from its iteration source
    pub fn classify_range<L: Lexeme>(&self, source: &[L]) -> LoopBound {
        let is_range = source
            .windows(2)
            .any(|w| w[0].text() == "range" && w[1].text() == "(");
        if is_range {
            LoopBound::Linear
        } else {
            LoopBound::Unknown
        }
    }
}

/// First identifier-shaped token of a condition
pub fn condition_variable<L: Lexeme>(cond: &[L]) -> Option<&str> {
    cond.iter().map(|t| t.text()).find(|t| is_identifier(t))
}

/// `*=`, `/=`, or a plain `=` with `*` or `/` somewhere after it
fn is_scaling_update<L: Lexeme>(update: &[L]) -> bool {
    if update.iter().any(|t| matches!(t.text(), "*=" | "/=" | "//=")) {
        return true;
    }
    match update.iter().position(|t| t.text() == "=") {
        Some(eq) => update[eq + 1..]
            .iter()
            .any(|t| matches!(t.text(), "*" | "/" | "//")),
        None => false,
    }
}

/// A comparison containing `x * x`, optionally restricted to one variable
fn is_squared_condition<L: Lexeme>(cond: &[L], var: Option<&str>) -> bool {
    if !cond.iter().any(|t| COMPARATORS.contains(&t.text())) {
        return false;
    }
    cond.windows(3).any(|w| {
        let (left, op, right) = (w[0].text(), w[1].text(), w[2].text());
        op == "*" && left == right && is_identifier(left) && var.map_or(true, |v| v == left)
    })
}

/// First update of `var` in a flat token span
///
/// Recognizes `v++`, `++v`, `v op= e` and `v = v op e`.
pub fn find_update<L: Lexeme>(tokens: &[L], var: &str) -> Option<UpdateKind> {
    let text = |i: usize| tokens.get(i).map(|t| t.text());

    for (i, tok) in tokens.iter().enumerate() {
        if matches!(tok.text(), "++" | "--") && text(i + 1) == Some(var) {
            return UpdateKind::from_compound(tok.text());
        }
        if tok.text() != var {
            continue;
        }
        if let Some(kind) = text(i + 1).and_then(UpdateKind::from_compound) {
            return Some(kind);
        }
        if text(i + 1) == Some("=") && text(i + 2) == Some(var) {
            if let Some(kind) = text(i + 3).and_then(UpdateKind::from_binary) {
                return Some(kind);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(src: &str) -> Vec<&str> {
        src.split_whitespace().collect()
    }

    #[test]
    fn test_for_linear() {
        let c = BoundClassifier::new();
        assert_eq!(
            c.classify_for(&toks("i < n"), &toks("i ++")),
            LoopBound::Linear
        );
        assert_eq!(
            c.classify_for(&toks("i >= 0"), &toks("i -= 1")),
            LoopBound::Linear
        );
    }

    #[test]
    fn test_for_logarithmic() {
        let c = BoundClassifier::new();
        assert_eq!(
            c.classify_for(&toks("i < n"), &toks("i *= 2")),
            LoopBound::Logarithmic
        );
        assert_eq!(
            c.classify_for(&toks("i > 0"), &toks("i = i / 2")),
            LoopBound::Logarithmic
        );
    }

    #[test]
    fn test_for_sqrt() {
        let c = BoundClassifier::new();
        assert_eq!(
            c.classify_for(&toks("i * i <= n"), &toks("i ++")),
            LoopBound::Sqrt
        );
        // No comparator: not a bound check
        assert_eq!(
            c.classify_for(&toks("i * i"), &toks("i ++")),
            LoopBound::Linear
        );
    }

    #[test]
    fn test_for_without_condition_is_unknown() {
        let c = BoundClassifier::new();
        assert_eq!(c.classify_for::<&str>(&[], &toks("i ++")), LoopBound::Unknown);
        assert_eq!(c.classify_for(&toks("1"), &[]), LoopBound::Unknown);
    }

    #[test]
    fn test_while_updates() {
        let c = BoundClassifier::new();
        let cond = toks("i < n");
        assert_eq!(c.classify_while(&cond, &toks("x = 1 ; i ++ ;")), LoopBound::Linear);
        assert_eq!(c.classify_while(&cond, &toks("++ i ;")), LoopBound::Linear);
        assert_eq!(c.classify_while(&cond, &toks("i = i * 2 ;")), LoopBound::Logarithmic);
        assert_eq!(c.classify_while(&cond, &toks("i /= 2 ;")), LoopBound::Logarithmic);
        assert_eq!(c.classify_while(&cond, &toks("i //= 2")), LoopBound::Logarithmic);
        assert_eq!(c.classify_while(&cond, &toks("j ++ ;")), LoopBound::Unknown);
        assert_eq!(c.classify_while(&toks("1"), &toks("i ++ ;")), LoopBound::Unknown);
    }

    #[test]
    fn test_while_sqrt_needs_same_variable() {
        let c = BoundClassifier::new();
        assert_eq!(
            c.classify_while(&toks("i * i < n"), &toks("i += 1 ;")),
            LoopBound::Sqrt
        );
        // Squared variable differs from the incremented one
        assert_eq!(
            c.classify_while(&toks("i < j * j"), &toks("i += 1 ;")),
            LoopBound::Linear
        );
    }

    #[test]
    fn test_first_update_wins() {
        assert_eq!(
            find_update(&toks("i *= 2 ; i ++"), "i"),
            Some(UpdateKind::Multiply)
        );
        assert_eq!(find_update(&toks("i = j + 1"), "i"), None);
    }

    #[test]
    fn test_range_source() {
        let c = BoundClassifier::new();
        assert_eq!(c.classify_range(&toks("range ( n )")), LoopBound::Linear);
        assert_eq!(
            c.classify_range(&toks("reversed ( range ( n ) )")),
            LoopBound::Linear
        );
        assert_eq!(c.classify_range(&toks("items")), LoopBound::Unknown);
    }
}
