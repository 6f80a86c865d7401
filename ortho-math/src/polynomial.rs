//! Sparse polynomials in rational powers of a single variable.
//!
//! A [`RationalExponentPolynomial`] is a finite sum `Σ c_k t^(e_k)` where both
//! the coefficients `c_k` and the exponents `e_k` are exact rationals. This is
//! exactly the function space spanned by the inverse-monomials `t^(1/n)` and
//! their products, so every operation needed for weighted Gram-Schmidt stays
//! closed: addition, scaling, full expansion of products, shifting exponents
//! (multiplying by `t^d`) and power-rule integration.
//!
//! The representation is canonical: terms are sorted by decreasing exponent,
//! exponents are unique and no coefficient is zero. Two polynomials are
//! therefore equal as functions iff they are structurally equal.

use crate::error::{MathError, MathResult};
use crate::rational::{rational_pow, to_f64};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rustc_hash::FxHashMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A single term `coeff * t^exponent`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Term {
    /// The coefficient of the term.
    pub coeff: BigRational,
    /// The rational exponent of the variable.
    pub exponent: BigRational,
}

impl Term {
    /// Create a new term.
    #[inline]
    pub fn new(coeff: BigRational, exponent: BigRational) -> Self {
        Self { coeff, exponent }
    }

    /// Check if this term is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TermDisplay { term: self, var: "t" })
    }
}

/// A polynomial in rational powers of one variable, with rational coefficients.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct RationalExponentPolynomial {
    /// Terms in decreasing exponent order, unique exponents, nonzero coefficients.
    terms: Vec<Term>,
}

impl RationalExponentPolynomial {
    /// Create the zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Create a constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        Self::monomial(c, BigRational::zero())
    }

    /// Create `coeff * t^exponent`.
    pub fn monomial(coeff: BigRational, exponent: BigRational) -> Self {
        if coeff.is_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![Term::new(coeff, exponent)],
            }
        }
    }

    /// Create `t^exponent`.
    pub fn power(exponent: BigRational) -> Self {
        Self::monomial(BigRational::one(), exponent)
    }

    /// Create a polynomial from terms. Merges like exponents and drops zeros.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut merged: FxHashMap<BigRational, BigRational> = FxHashMap::default();
        for term in terms {
            *merged.entry(term.exponent).or_insert_with(BigRational::zero) += term.coeff;
        }

        let mut terms: Vec<Term> = merged
            .into_iter()
            .filter(|(_, c)| !c.is_zero())
            .map(|(e, c)| Term::new(c, e))
            .collect();
        terms.sort_by(|a, b| b.exponent.cmp(&a.exponent));

        Self { terms }
    }

    /// Create a polynomial from `(coefficient, exponent)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (BigRational, BigRational)>) -> Self {
        Self::from_terms(pairs.into_iter().map(|(c, e)| Term::new(c, e)))
    }

    /// Check if the polynomial is identically zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of (nonzero) terms.
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Terms in decreasing exponent order.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Exponents in decreasing order.
    pub fn exponents(&self) -> impl Iterator<Item = &BigRational> {
        self.terms.iter().map(|t| &t.exponent)
    }

    /// Coefficient of `t^exponent` (zero if absent).
    pub fn coeff(&self, exponent: &BigRational) -> BigRational {
        self.terms
            .binary_search_by(|t| exponent.cmp(&t.exponent))
            .map(|i| self.terms[i].coeff.clone())
            .unwrap_or_else(|_| BigRational::zero())
    }

    /// The term with the largest exponent.
    #[inline]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Check whether every coefficient is an integer.
    pub fn has_integer_coeffs(&self) -> bool {
        self.terms.iter().all(|t| t.coeff.is_integer())
    }

    /// Negate the polynomial.
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(-t.coeff.clone(), t.exponent.clone()))
                .collect(),
        }
    }

    /// Add two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_terms(self.terms.iter().chain(other.terms.iter()).cloned())
    }

    /// Subtract two polynomials.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiply by a scalar.
    pub fn scale(&self, c: &BigRational) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        if c.is_one() {
            return self.clone();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(&t.coeff * c, t.exponent.clone()))
                .collect(),
        }
    }

    /// Multiply two polynomials, fully expanded.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut terms = Vec::with_capacity(self.terms.len() * other.terms.len());
        for t1 in &self.terms {
            for t2 in &other.terms {
                terms.push(Term::new(&t1.coeff * &t2.coeff, &t1.exponent + &t2.exponent));
            }
        }
        Self::from_terms(terms)
    }

    /// Multiply by `t^delta`, shifting every exponent.
    pub fn shift(&self, delta: &BigRational) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|t| Term::new(t.coeff.clone(), &t.exponent + delta))
                .collect(),
        }
    }

    /// Exact definite integral over `[lower, upper]` by the power rule.
    ///
    /// Requires `0 <= lower < upper`. Fails on a `t^-1` term (logarithmic),
    /// on a term that diverges at a zero lower bound, and when a boundary
    /// power is irrational.
    pub fn definite_integral(
        &self,
        lower: &BigRational,
        upper: &BigRational,
    ) -> MathResult<BigRational> {
        if lower.is_negative() || lower >= upper {
            return Err(MathError::InvalidBounds {
                lower: lower.clone(),
                upper: upper.clone(),
            });
        }

        let mut total = BigRational::zero();
        for term in &self.terms {
            let raised = &term.exponent + BigRational::one();
            if raised.is_zero() {
                return Err(MathError::LogarithmicTerm {
                    exponent: term.exponent.clone(),
                });
            }
            if lower.is_zero() && raised.is_negative() {
                return Err(MathError::DivergentIntegral {
                    exponent: term.exponent.clone(),
                });
            }

            let at_upper = rational_pow(upper, &raised)?;
            let at_lower = if lower.is_zero() {
                BigRational::zero()
            } else {
                rational_pow(lower, &raised)?
            };
            total += &term.coeff * (at_upper - at_lower) / &raised;
        }
        Ok(total)
    }

    /// Rational content: gcd of numerators over lcm of denominators, carrying
    /// the sign of the leading coefficient. One for the zero polynomial.
    pub fn content(&self) -> BigRational {
        let Some(leading) = self.terms.first() else {
            return BigRational::one();
        };

        let mut num_gcd = BigInt::zero();
        let mut den_lcm = BigInt::one();
        for term in &self.terms {
            num_gcd = num_gcd.gcd(term.coeff.numer());
            den_lcm = den_lcm.lcm(term.coeff.denom());
        }

        let content = BigRational::new(num_gcd, den_lcm);
        if leading.coeff.is_negative() {
            -content
        } else {
            content
        }
    }

    /// Split into `(content, primitive)` where `primitive` has coprime integer
    /// coefficients and a positive leading coefficient.
    pub fn primitive(&self) -> (BigRational, Self) {
        if self.is_zero() {
            return (BigRational::one(), Self::zero());
        }
        let content = self.content();
        let primitive = self.scale(&content.recip());
        (content, primitive)
    }

    /// Evaluate numerically at `x >= 0`.
    pub fn eval_f64(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| to_f64(&t.coeff) * x.powf(to_f64(&t.exponent)))
            .sum()
    }

    /// Display with a custom variable name, e.g. `(t/L)`.
    pub fn display_with<'a>(&'a self, var: &'a str) -> PolynomialDisplay<'a> {
        PolynomialDisplay { poly: self, var }
    }
}

/// Formats a term as `c*var^(p/q)`.
struct TermDisplay<'a> {
    term: &'a Term,
    var: &'a str,
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Term { coeff, exponent } = self.term;
        if exponent.is_zero() {
            return write!(f, "{coeff}");
        }

        if *coeff == -BigRational::one() {
            write!(f, "-")?;
        } else if !coeff.is_one() {
            if coeff.is_integer() {
                write!(f, "{coeff}*")?;
            } else {
                write!(f, "({coeff})*")?;
            }
        }

        if exponent.is_one() {
            write!(f, "{}", self.var)
        } else if exponent.is_integer() && exponent.is_positive() {
            write!(f, "{}^{}", self.var, exponent)
        } else {
            write!(f, "{}^({})", self.var, exponent)
        }
    }
}

/// [`fmt::Display`] adapter returned by [`RationalExponentPolynomial::display_with`].
pub struct PolynomialDisplay<'a> {
    poly: &'a RationalExponentPolynomial,
    var: &'a str,
}

impl fmt::Display for PolynomialDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return write!(f, "0");
        }
        for (i, term) in self.poly.terms.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", TermDisplay { term, var: self.var })?;
            } else if term.coeff.is_negative() {
                let positive = Term::new(-term.coeff.clone(), term.exponent.clone());
                write!(
                    f,
                    " - {}",
                    TermDisplay {
                        term: &positive,
                        var: self.var
                    }
                )?;
            } else {
                write!(f, " + {}", TermDisplay { term, var: self.var })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RationalExponentPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with("t"))
    }
}

impl fmt::Display for RationalExponentPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Neg for RationalExponentPolynomial {
    type Output = RationalExponentPolynomial;

    fn neg(self) -> Self::Output {
        RationalExponentPolynomial::neg(&self)
    }
}

impl Neg for &RationalExponentPolynomial {
    type Output = RationalExponentPolynomial;

    fn neg(self) -> Self::Output {
        RationalExponentPolynomial::neg(self)
    }
}

impl Add for RationalExponentPolynomial {
    type Output = RationalExponentPolynomial;

    fn add(self, rhs: Self) -> Self::Output {
        RationalExponentPolynomial::add(&self, &rhs)
    }
}

impl Add<&RationalExponentPolynomial> for &RationalExponentPolynomial {
    type Output = RationalExponentPolynomial;

    fn add(self, rhs: &RationalExponentPolynomial) -> Self::Output {
        RationalExponentPolynomial::add(self, rhs)
    }
}

impl Sub for RationalExponentPolynomial {
    type Output = RationalExponentPolynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        RationalExponentPolynomial::sub(&self, &rhs)
    }
}

impl Sub<&RationalExponentPolynomial> for &RationalExponentPolynomial {
    type Output = RationalExponentPolynomial;

    fn sub(self, rhs: &RationalExponentPolynomial) -> Self::Output {
        RationalExponentPolynomial::sub(self, rhs)
    }
}

impl Mul for RationalExponentPolynomial {
    type Output = RationalExponentPolynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        RationalExponentPolynomial::mul(&self, &rhs)
    }
}

impl Mul<&RationalExponentPolynomial> for &RationalExponentPolynomial {
    type Output = RationalExponentPolynomial;

    fn mul(self, rhs: &RationalExponentPolynomial) -> Self::Output {
        RationalExponentPolynomial::mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{rat, ratio};

    fn sqrt_t() -> RationalExponentPolynomial {
        RationalExponentPolynomial::power(ratio(1, 2))
    }

    fn cbrt_t() -> RationalExponentPolynomial {
        RationalExponentPolynomial::power(ratio(1, 3))
    }

    #[test]
    fn test_zero() {
        let p = RationalExponentPolynomial::zero();
        assert!(p.is_zero());
        assert_eq!(p.num_terms(), 0);
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn test_monomial_with_zero_coeff_is_zero() {
        assert!(RationalExponentPolynomial::monomial(rat(0), ratio(1, 2)).is_zero());
    }

    #[test]
    fn test_from_terms_merges_and_sorts() {
        let p = RationalExponentPolynomial::from_pairs([
            (rat(2), ratio(1, 3)),
            (rat(1), ratio(1, 2)),
            (rat(-2), ratio(1, 3)),
            (rat(5), ratio(2, 4)),
        ]);
        assert_eq!(p.num_terms(), 1);
        assert_eq!(p.coeff(&ratio(1, 2)), rat(6));
        assert_eq!(p.coeff(&ratio(1, 3)), rat(0));
    }

    #[test]
    fn test_terms_in_decreasing_exponent_order() {
        let p = &(&cbrt_t() + &sqrt_t()) + &RationalExponentPolynomial::power(ratio(1, 4));
        let exps: Vec<_> = p.exponents().cloned().collect();
        assert_eq!(exps, vec![ratio(1, 2), ratio(1, 3), ratio(1, 4)]);
    }

    #[test]
    fn test_sub_cancels() {
        let p = &sqrt_t() + &cbrt_t();
        assert!((&p - &p).is_zero());
    }

    #[test]
    fn test_mul_expands() {
        // (t^(1/2) + t^(1/3))^2 = t + 2 t^(5/6) + t^(2/3)
        let p = &sqrt_t() + &cbrt_t();
        let sq = &p * &p;
        assert_eq!(sq.num_terms(), 3);
        assert_eq!(sq.coeff(&rat(1)), rat(1));
        assert_eq!(sq.coeff(&ratio(5, 6)), rat(2));
        assert_eq!(sq.coeff(&ratio(2, 3)), rat(1));
    }

    #[test]
    fn test_shift() {
        let p = sqrt_t().shift(&rat(-1));
        assert_eq!(p.coeff(&ratio(-1, 2)), rat(1));
    }

    #[test]
    fn test_definite_integral_power_rule() {
        // ∫_0^1 t^(-1/6) dt = 6/5
        let p = RationalExponentPolynomial::power(ratio(-1, 6));
        assert_eq!(p.definite_integral(&rat(0), &rat(1)).unwrap(), ratio(6, 5));

        // ∫_0^64 t^(-1/6) dt = 64^(5/6) * 6/5 = 192/5
        assert_eq!(p.definite_integral(&rat(0), &rat(64)).unwrap(), ratio(192, 5));

        // ∫_1^4 t dt = 15/2
        let q = RationalExponentPolynomial::power(rat(1));
        assert_eq!(q.definite_integral(&rat(1), &rat(4)).unwrap(), ratio(15, 2));
    }

    #[test]
    fn test_definite_integral_rejects_log_term() {
        let p = RationalExponentPolynomial::power(rat(-1));
        assert!(matches!(
            p.definite_integral(&rat(1), &rat(2)),
            Err(MathError::LogarithmicTerm { .. })
        ));
    }

    #[test]
    fn test_definite_integral_rejects_divergence_at_zero() {
        let p = RationalExponentPolynomial::power(ratio(-3, 2));
        assert!(matches!(
            p.definite_integral(&rat(0), &rat(1)),
            Err(MathError::DivergentIntegral { .. })
        ));
    }

    #[test]
    fn test_definite_integral_rejects_irrational_boundary() {
        let p = sqrt_t();
        assert!(matches!(
            p.definite_integral(&rat(0), &rat(2)),
            Err(MathError::IrrationalPower { .. })
        ));
    }

    #[test]
    fn test_definite_integral_rejects_bad_bounds() {
        let p = sqrt_t();
        assert!(matches!(
            p.definite_integral(&rat(1), &rat(1)),
            Err(MathError::InvalidBounds { .. })
        ));
        assert!(matches!(
            p.definite_integral(&rat(-1), &rat(1)),
            Err(MathError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_primitive() {
        // t^(1/3) - 6/5 t^(1/2) = -1/5 * (6 t^(1/2) - 5 t^(1/3))
        let p = &cbrt_t() - &sqrt_t().scale(&ratio(6, 5));
        let (content, prim) = p.primitive();
        assert_eq!(content, ratio(-1, 5));
        assert_eq!(prim.coeff(&ratio(1, 2)), rat(6));
        assert_eq!(prim.coeff(&ratio(1, 3)), rat(-5));
        assert!(prim.has_integer_coeffs());
        assert_eq!(prim.scale(&content), p);
    }

    #[test]
    fn test_display() {
        let p = &sqrt_t().scale(&rat(6)) - &cbrt_t().scale(&rat(5));
        assert_eq!(p.to_string(), "6*t^(1/2) - 5*t^(1/3)");
        assert_eq!(p.display_with("(t/L)").to_string(), "6*(t/L)^(1/2) - 5*(t/L)^(1/3)");

        let q = &RationalExponentPolynomial::power(rat(1)).neg() + &sqrt_t().scale(&ratio(1, 2));
        assert_eq!(q.to_string(), "-t + (1/2)*t^(1/2)");
    }

    #[test]
    fn test_eval_f64() {
        let p = &sqrt_t().scale(&rat(6)) - &cbrt_t().scale(&rat(5));
        let value = p.eval_f64(1.0);
        assert!((value - 1.0).abs() < 1e-12);
        let value = p.eval_f64(0.0);
        assert!(value.abs() < 1e-12);
    }
}
