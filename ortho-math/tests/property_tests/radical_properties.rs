//! Property-based tests for exact radicals

use num_bigint::BigInt;
use num_rational::BigRational;
use ortho_math::Radical;
use proptest::prelude::*;

/// Strategy for positive rationals
fn positive_rational() -> impl Strategy<Value = BigRational> {
    (1i64..50, 1i64..50).prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
}

/// Strategy for nonzero radicals
fn radical() -> impl Strategy<Value = Radical> {
    (proptest::bool::ANY, positive_rational())
        .prop_map(|(neg, r)| Radical::new(neg, r).expect("positive radicand"))
}

proptest! {
    /// Multiplication is commutative
    #[test]
    fn multiplication_commutes(a in radical(), b in radical()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    /// x * x^-1 = 1
    #[test]
    fn reciprocal_cancels(a in radical()) {
        let inv = a.recip().expect("nonzero");
        prop_assert!(a.mul(&inv).is_one());
    }

    /// The square of a radical is its radicand
    #[test]
    fn square_is_radicand(a in radical()) {
        prop_assert_eq!(a.square(), a.radicand().clone());
    }

    /// Quotient by itself is exactly one
    #[test]
    fn division_by_self(a in radical()) {
        let q = a.div(&a).expect("nonzero");
        prop_assert_eq!(q.to_rational(), Some(BigRational::from_integer(BigInt::from(1))));
    }

    /// Embedding a rational and reading it back is the identity
    #[test]
    fn rational_embedding(r in positive_rational(), neg in proptest::bool::ANY) {
        let value = if neg { -r.clone() } else { r.clone() };
        prop_assert_eq!(Radical::from_rational(&value).to_rational(), Some(value));
    }

    /// Sign of a product is the product of signs
    #[test]
    fn sign_is_multiplicative(a in radical(), b in radical()) {
        prop_assert_eq!(a.mul(&b).signum(), a.signum() * b.signum());
    }
}
