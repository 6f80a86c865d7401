//! Exact inner product with weight `1/t`.
//!
//! `<f, g> = ∫_a^b f(t) g(t) / t dt`. The product is fully expanded first
//! (the integral is only linear term-by-term after expansion), every exponent
//! is shifted down by one for the weight, and each term is integrated by the
//! power rule. A term landing on `t^-1` would need a logarithm; it cannot
//! arise from the seed family and is reported as an error.

use crate::error::OrthoResult;
use crate::interval::Interval;
use num_rational::BigRational;
use num_traits::One;
use ortho_math::{Radical, RationalExponentPolynomial, ScaledPolynomial};

/// `∫ f g / t` over `interval`, exactly.
pub fn inner_product(
    f: &RationalExponentPolynomial,
    g: &RationalExponentPolynomial,
    interval: &Interval,
) -> OrthoResult<BigRational> {
    let weighted = f.mul(g).shift(&-BigRational::one());
    Ok(weighted.definite_integral(interval.lower(), interval.upper())?)
}

/// Inner product of two scaled polynomials: `alpha_f * alpha_g * <p_f, p_g>`.
pub fn inner_product_scaled(
    f: &ScaledPolynomial,
    g: &ScaledPolynomial,
    interval: &Interval,
) -> OrthoResult<Radical> {
    let value = inner_product(f.polynomial(), g.polynomial(), interval)?;
    Ok(Radical::from_rational(&value).mul(f.alpha()).mul(g.alpha()))
}

/// Squared weighted norm `<f, f>`.
pub fn norm_squared(f: &RationalExponentPolynomial, interval: &Interval) -> OrthoResult<BigRational> {
    inner_product(f, f, interval)
}
