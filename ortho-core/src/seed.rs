//! The inverse-monomial seed family `phi_k(t) = t^(1/(k+1))`.

use num_bigint::BigInt;
use num_rational::BigRational;
use ortho_math::RationalExponentPolynomial;

/// Exponent `1/(k+1)` of the `k`-th seed.
pub fn seed_exponent(k: usize) -> BigRational {
    BigRational::new(BigInt::from(1), BigInt::from(k + 1))
}

/// The `k`-th seed function `t^(1/(k+1))`.
pub fn seed_function(k: usize) -> RationalExponentPolynomial {
    RationalExponentPolynomial::power(seed_exponent(k))
}
