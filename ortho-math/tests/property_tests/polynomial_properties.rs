//! Property-based tests for rational-exponent polynomials
//!
//! - Ring laws of addition and multiplication
//! - Canonical form (sorted, merged, no zero terms)
//! - Linearity of the definite integral

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use ortho_math::RationalExponentPolynomial;
use proptest::prelude::*;

/// Strategy for small nonzero rationals
fn small_rational() -> impl Strategy<Value = BigRational> {
    (-20i64..20, 1i64..10).prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
}

/// Strategy for seed-like exponents `1/k`
fn seed_exponent() -> impl Strategy<Value = BigRational> {
    (1i64..12).prop_map(|k| BigRational::new(BigInt::one(), BigInt::from(k)))
}

/// Strategy for short polynomials over seed exponents
fn polynomial() -> impl Strategy<Value = RationalExponentPolynomial> {
    prop::collection::vec((small_rational(), seed_exponent()), 0..5)
        .prop_map(RationalExponentPolynomial::from_pairs)
}

fn unit_integral(p: &RationalExponentPolynomial) -> BigRational {
    p.definite_integral(&BigRational::zero(), &BigRational::one())
        .expect("seed exponents integrate on [0, 1]")
}

proptest! {
    /// Terms are strictly descending in exponent with no zero coefficients
    #[test]
    fn canonical_form(p in polynomial()) {
        let terms = p.terms();
        for pair in terms.windows(2) {
            prop_assert!(pair[0].exponent > pair[1].exponent);
        }
        prop_assert!(terms.iter().all(|t| !t.coeff.is_zero()));
    }

    /// Addition is commutative
    #[test]
    fn addition_commutes(p in polynomial(), q in polynomial()) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    /// p - p is the zero polynomial
    #[test]
    fn subtraction_cancels(p in polynomial()) {
        prop_assert!((&p - &p).is_zero());
    }

    /// Multiplication is commutative
    #[test]
    fn multiplication_commutes(p in polynomial(), q in polynomial()) {
        prop_assert_eq!(&p * &q, &q * &p);
    }

    /// Multiplication distributes over addition
    #[test]
    fn multiplication_distributes(p in polynomial(), q in polynomial(), r in polynomial()) {
        let lhs = &p * &(&q + &r);
        let rhs = &(&p * &q) + &(&p * &r);
        prop_assert_eq!(lhs, rhs);
    }

    /// The definite integral is linear
    #[test]
    fn integral_is_linear(p in polynomial(), q in polynomial(), c in small_rational()) {
        let combined = &p.scale(&c) + &q;
        prop_assert_eq!(unit_integral(&combined), c * unit_integral(&p) + unit_integral(&q));
    }

    /// content * primitive reconstructs the polynomial
    #[test]
    fn primitive_decomposition(p in polynomial()) {
        let (content, primitive) = p.primitive();
        prop_assert_eq!(primitive.scale(&content), p.clone());
        prop_assert!(primitive.has_integer_coeffs());
        if let Some(lead) = primitive.leading_term() {
            prop_assert!(lead.coeff > BigRational::zero());
        }
    }

    /// Floating evaluation agrees with the exact value at t = 1
    #[test]
    fn eval_at_one_is_coefficient_sum(p in polynomial()) {
        let sum = p.terms().iter().fold(BigRational::zero(), |acc, t| acc + &t.coeff);
        let expected = ortho_math::rational::to_f64(&sum);
        prop_assert!((p.eval_f64(1.0) - expected).abs() < 1e-9);
    }
}
