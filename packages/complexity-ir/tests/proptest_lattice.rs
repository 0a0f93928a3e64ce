//! Property-based tests for the complexity lattice
//!
//! Laws that must hold for ALL values:
//! - multiply: commutative, associative, O(1) is the identity, O(?) absorbs
//! - max: commutative, associative, idempotent, O(?) dominates
//! - exponent reduction is canonical

use complexity_ir::{Complexity, Exponent};
use proptest::prelude::*;

// Strategy for bounded values: small rational degree, small log power
fn bounded() -> impl Strategy<Value = Complexity> {
    (0i64..12, 1i64..7, 0u32..5)
        .prop_filter_map("valid exponent", |(num, den, log)| Complexity::from_parts(num, den, log))
}

// Strategy mixing in the unknown value
fn complexity() -> impl Strategy<Value = Complexity> {
    prop_oneof![
        8 => bounded(),
        1 => Just(Complexity::Unknown),
    ]
}

proptest! {
    #[test]
    fn multiply_is_commutative(a in complexity(), b in complexity()) {
        prop_assert_eq!(a.multiply(b), b.multiply(a));
    }

    #[test]
    fn multiply_is_associative(a in complexity(), b in complexity(), c in complexity()) {
        prop_assert_eq!(a.multiply(b).multiply(c), a.multiply(b.multiply(c)));
    }

    #[test]
    fn constant_is_multiply_identity(a in complexity()) {
        prop_assert_eq!(Complexity::constant().multiply(a), a);
        prop_assert_eq!(a.multiply(Complexity::constant()), a);
    }

    #[test]
    fn unknown_absorbs_multiply(a in complexity()) {
        prop_assert_eq!(a.multiply(Complexity::Unknown), Complexity::Unknown);
    }

    #[test]
    fn max_is_commutative(a in complexity(), b in complexity()) {
        prop_assert_eq!(a.max(b), b.max(a));
    }

    #[test]
    fn max_is_associative(a in complexity(), b in complexity(), c in complexity()) {
        prop_assert_eq!(a.max(b).max(c), a.max(b.max(c)));
    }

    #[test]
    fn max_is_idempotent(a in complexity()) {
        prop_assert_eq!(a.max(a), a);
    }

    #[test]
    fn unknown_dominates_max(a in complexity()) {
        prop_assert_eq!(a.max(Complexity::Unknown), Complexity::Unknown);
        prop_assert_eq!(Complexity::Unknown.max(a), Complexity::Unknown);
    }

    #[test]
    fn max_prefers_larger_degree(a in bounded(), b in bounded()) {
        let m = a.max(b);
        prop_assert!(m.degree() >= a.degree() && m.degree() >= b.degree());
    }

    #[test]
    fn reduction_is_canonical(num in 0i64..50, den in 1i64..50, k in 1i64..20, log in 0u32..4) {
        let plain = Complexity::from_parts(num, den, log).unwrap();
        let scaled = Complexity::from_parts(num * k, den * k, log).unwrap();
        prop_assert_eq!(plain, scaled);
        prop_assert_eq!(plain.to_string(), scaled.to_string());
    }

    #[test]
    fn exponent_order_matches_rationals(a in 0i64..40, b in 1i64..40, c in 0i64..40, d in 1i64..40) {
        let x = Exponent::new(a, b).unwrap();
        let y = Exponent::new(c, d).unwrap();
        prop_assert_eq!(x.cmp(&y), (a * d).cmp(&(c * b)));
    }
}

#[test]
fn test_half_renders_as_sqrt() {
    assert_eq!(Complexity::from_parts(2, 4, 0).unwrap().to_string(), "O(sqrt n)");
    assert_eq!(Complexity::from_parts(2, 4, 0), Complexity::from_parts(1, 2, 0));
}
