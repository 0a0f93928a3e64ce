//! Complexity lattice
//!
//! A growth class is `n^(p/q) * (log n)^k`, or `Unknown` when some loop on the
//! path could not be bounded. Values are immutable; every operation returns a
//! fresh value.
//!
//! Composition:
//! - Nesting: [`Complexity::multiply`] (exponents and log powers add)
//! - Sequence: `Ord::max` (exponent first, then log power; `Unknown` on top)
//!
//! ```text
//! for i in 0..n {            → n
//!     for j in 0..n { }      → n * n = n^2
//! }
//! while i < n { i *= 2 }     → log n
//!                            → max(n^2, log n) = n^2
//! ```

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Rational polynomial exponent, always in lowest terms with a positive
/// denominator. Arithmetic runs in `i128` and saturates at the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exponent {
    num: i64,
    den: i64,
}

impl Exponent {
    pub const ZERO: Exponent = Exponent { num: 0, den: 1 };
    pub const ONE: Exponent = Exponent { num: 1, den: 1 };
    pub const HALF: Exponent = Exponent { num: 1, den: 2 };

    /// Reduced `num/den`; `None` for a zero denominator.
    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        Some(Self::reduced(num as i128, den as i128))
    }

    /// `den` must be non-zero
    fn reduced(num: i128, den: i128) -> Self {
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let divisor = gcd(num.unsigned_abs(), den.unsigned_abs()).max(1) as i128;
        let num = saturate(num / divisor);
        let den = saturate(den / divisor).max(1);
        // Saturation can leave a common factor behind
        let divisor = gcd(num.unsigned_abs() as u128, den.unsigned_abs() as u128).max(1) as i64;
        Self {
            num: num / divisor,
            den: den / divisor,
        }
    }

    pub fn integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Exact sum, reduced
    pub fn add(self, other: Exponent) -> Exponent {
        let (a, b) = (self.num as i128, self.den as i128);
        let (c, d) = (other.num as i128, other.den as i128);
        // Both denominators are positive, so the product is too.
        Exponent::reduced(a * d + c * b, b * d)
    }
}

impl Ord for Exponent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-multiplication; denominators are positive.
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Exponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

fn saturate(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Asymptotic growth class
///
/// The derived ordering relies on declaration order: `Bounded` sorts below
/// `Unknown`, and bounded values compare `degree` before `log_power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Complexity {
    /// `n^degree * (log n)^log_power`
    Bounded { degree: Exponent, log_power: u32 },
    /// At least one loop on the path has no determinable bound
    Unknown,
}

impl Complexity {
    /// `O(1)`: the identity of both `multiply` and `max`
    pub const fn constant() -> Self {
        Complexity::Bounded {
            degree: Exponent::ZERO,
            log_power: 0,
        }
    }

    pub const fn polylog(degree: Exponent, log_power: u32) -> Self {
        Complexity::Bounded { degree, log_power }
    }

    /// Build from raw parts; `None` for a zero denominator.
    pub fn from_parts(degree_num: i64, degree_den: i64, log_power: u32) -> Option<Self> {
        Exponent::new(degree_num, degree_den).map(|degree| Self::polylog(degree, log_power))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Complexity::Unknown)
    }

    pub fn degree(&self) -> Option<Exponent> {
        match self {
            Complexity::Bounded { degree, .. } => Some(*degree),
            Complexity::Unknown => None,
        }
    }

    pub fn log_power(&self) -> Option<u32> {
        match self {
            Complexity::Bounded { log_power, .. } => Some(*log_power),
            Complexity::Unknown => None,
        }
    }

    /// Nesting composition. `Unknown` absorbs.
    pub fn multiply(self, other: Complexity) -> Complexity {
        match (self, other) {
            (
                Complexity::Bounded {
                    degree: d1,
                    log_power: l1,
                },
                Complexity::Bounded {
                    degree: d2,
                    log_power: l2,
                },
            ) => Complexity::Bounded {
                degree: d1.add(d2),
                log_power: l1.saturating_add(l2),
            },
            _ => Complexity::Unknown,
        }
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self::constant()
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (degree, log_power) = match self {
            Complexity::Unknown => return f.write_str("O(?)"),
            Complexity::Bounded { degree, log_power } => (*degree, *log_power),
        };
        if degree.is_zero() && log_power == 0 {
            return f.write_str("O(1)");
        }

        let mut terms: Vec<String> = Vec::with_capacity(2);
        if !degree.is_zero() {
            terms.push(match (degree.numerator(), degree.denominator()) {
                (1, 1) => "n".to_string(),
                (k, 1) => format!("n^{}", k),
                (1, 2) => "sqrt n".to_string(),
                (p, q) => format!("n^({}/{})", p, q),
            });
        }
        match log_power {
            0 => {}
            1 => terms.push("log n".to_string()),
            k => terms.push(format!("(log n)^{}", k)),
        }
        write!(f, "O({})", terms.join(" "))
    }
}

impl Serialize for Complexity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
