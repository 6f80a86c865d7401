//! Ortho Math - Exact algebra for weighted Gram-Schmidt
//!
//! This crate provides the exact arithmetic the orthogonalization pipeline is
//! built on:
//! - [`RationalExponentPolynomial`]: sparse sums of rational powers of `t`
//!   with rational coefficients and power-rule integration
//! - [`Radical`]: signed square roots of rationals
//! - [`ScaledPolynomial`]: a radical times a polynomial
//! - [`rational`]: perfect-power roots, rational powers and exact parsing
//!
//! No floating point is involved except in the explicit `*_f64` helpers used
//! for sampling.
//!
//! # Examples
//!
//! ```
//! use ortho_math::{RationalExponentPolynomial, rational::{rat, ratio}};
//!
//! // ∫_0^1 t^(1/2) * t^(1/3) / t dt = 6/5
//! let f = RationalExponentPolynomial::power(ratio(1, 2));
//! let g = RationalExponentPolynomial::power(ratio(1, 3));
//! let weighted = (&f * &g).shift(&rat(-1));
//! assert_eq!(weighted.definite_integral(&rat(0), &rat(1)).unwrap(), ratio(6, 5));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod polynomial;
pub mod radical;
pub mod rational;
pub mod scaled;

pub use error::{MathError, MathResult};
pub use polynomial::{RationalExponentPolynomial, Term};
pub use radical::Radical;
pub use scaled::ScaledPolynomial;
