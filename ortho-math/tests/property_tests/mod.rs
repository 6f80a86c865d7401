//! Property-based tests for ortho-math
//!
//! Algebraic laws of rational-exponent polynomials and exact radicals,
//! checked with proptest.

mod polynomial_properties;
mod radical_properties;
