//! A polynomial multiplied by an exact radical.

use crate::polynomial::RationalExponentPolynomial;
use crate::radical::Radical;
use num_rational::BigRational;
use std::fmt;

/// `alpha * p(t)` where `alpha = ±sqrt(r)` and `p` has rational exponents.
///
/// The same function has many representations (`alpha` can absorb any
/// rational factor of `p`); use [`ScaledPolynomial::same_function`] to compare
/// values and [`ScaledPolynomial::normalized`] to reach the canonical form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ScaledPolynomial {
    alpha: Radical,
    poly: RationalExponentPolynomial,
}

impl ScaledPolynomial {
    /// Create `alpha * poly`.
    pub fn new(alpha: Radical, poly: RationalExponentPolynomial) -> Self {
        Self { alpha, poly }
    }

    /// Lift a plain polynomial (`alpha = 1`).
    pub fn from_polynomial(poly: RationalExponentPolynomial) -> Self {
        Self::new(Radical::one(), poly)
    }

    /// The zero function.
    pub fn zero() -> Self {
        Self::new(Radical::one(), RationalExponentPolynomial::zero())
    }

    /// The radical factor.
    #[inline]
    pub fn alpha(&self) -> &Radical {
        &self.alpha
    }

    /// The polynomial factor.
    #[inline]
    pub fn polynomial(&self) -> &RationalExponentPolynomial {
        &self.poly
    }

    /// Check whether the function is identically zero.
    pub fn is_zero(&self) -> bool {
        self.alpha.is_zero() || self.poly.is_zero()
    }

    /// Canonical form: the polynomial's rational content is moved into
    /// `alpha`, leaving coprime integer coefficients with a positive leading
    /// coefficient.
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let (content, primitive) = self.poly.primitive();
        Self::new(self.alpha.scale(&content), primitive)
    }

    /// Multiply by a rational.
    pub fn scale(&self, c: &BigRational) -> Self {
        Self::new(self.alpha.clone(), self.poly.scale(c))
    }

    /// Multiply out `alpha` if it is rational.
    pub fn to_rational_polynomial(&self) -> Option<RationalExponentPolynomial> {
        let alpha = self.alpha.to_rational()?;
        Some(self.poly.scale(&alpha))
    }

    /// Exact equality as functions, regardless of how the rational factors are
    /// split between `alpha` and the polynomial.
    pub fn same_function(&self, other: &Self) -> bool {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        let Ok(ratio) = self.alpha.div(&other.alpha) else {
            return false;
        };
        match ratio.to_rational() {
            Some(r) => self.poly.scale(&r) == other.poly,
            None => false,
        }
    }

    /// Evaluate numerically at `x >= 0`.
    pub fn eval_f64(&self, x: f64) -> f64 {
        self.alpha.to_f64() * self.poly.eval_f64(x)
    }

    /// Display with a custom variable name.
    pub fn display_with<'a>(&'a self, var: &'a str) -> ScaledDisplay<'a> {
        ScaledDisplay { scaled: self, var }
    }
}

/// [`fmt::Display`] adapter returned by [`ScaledPolynomial::display_with`].
pub struct ScaledDisplay<'a> {
    scaled: &'a ScaledPolynomial,
    var: &'a str,
}

impl fmt::Display for ScaledDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ScaledPolynomial { alpha, poly } = self.scaled;
        if self.scaled.is_zero() {
            return write!(f, "0");
        }
        if alpha.is_one() {
            return write!(f, "{}", poly.display_with(self.var));
        }
        if poly.num_terms() == 1 {
            write!(f, "{} * {}", alpha, poly.display_with(self.var))
        } else {
            write!(f, "{} * ({})", alpha, poly.display_with(self.var))
        }
    }
}

impl fmt::Debug for ScaledPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with("t"))
    }
}

impl fmt::Display for ScaledPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
