//! Signed square roots of rationals.
//!
//! Normalization constants of Gram-Schmidt are of the form `±sqrt(r)` with
//! `r` rational. [`Radical`] tracks them exactly as a sign and a radicand so
//! products, quotients and the final "is it exactly one" test never touch
//! floating point.

use crate::error::{MathError, MathResult};
use crate::rational::{rational_sqrt, to_f64};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// The real number `(-1)^negative * sqrt(radicand)`, with `radicand >= 0`.
///
/// Zero is always stored with `negative == false`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Radical {
    negative: bool,
    radicand: BigRational,
}

impl Radical {
    /// Create `±sqrt(radicand)`.
    pub fn new(negative: bool, radicand: BigRational) -> MathResult<Self> {
        if radicand.is_negative() {
            return Err(MathError::NegativeValue { value: radicand });
        }
        let negative = negative && !radicand.is_zero();
        Ok(Self { negative, radicand })
    }

    /// Create `+sqrt(radicand)`.
    pub fn sqrt(radicand: BigRational) -> MathResult<Self> {
        Self::new(false, radicand)
    }

    /// Embed a rational `r` as `sign(r) * sqrt(r^2)`.
    pub fn from_rational(r: &BigRational) -> Self {
        Self {
            negative: r.is_negative(),
            radicand: r * r,
        }
    }

    /// Zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            radicand: BigRational::zero(),
        }
    }

    /// One.
    pub fn one() -> Self {
        Self {
            negative: false,
            radicand: BigRational::one(),
        }
    }

    /// Check for zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.radicand.is_zero()
    }

    /// Check for exactly one.
    #[inline]
    pub fn is_one(&self) -> bool {
        !self.negative && self.radicand.is_one()
    }

    /// Check for a strictly negative value.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Sign as -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// The non-negative rational under the root.
    #[inline]
    pub fn radicand(&self) -> &BigRational {
        &self.radicand
    }

    /// The square of the value, which is always rational.
    #[inline]
    pub fn square(&self) -> BigRational {
        self.radicand.clone()
    }

    /// Negate.
    pub fn neg(&self) -> Self {
        Self {
            negative: !self.negative && !self.is_zero(),
            radicand: self.radicand.clone(),
        }
    }

    /// Multiply two radicals.
    pub fn mul(&self, other: &Self) -> Self {
        let radicand = &self.radicand * &other.radicand;
        Self {
            negative: (self.negative != other.negative) && !radicand.is_zero(),
            radicand,
        }
    }

    /// Multiply by a rational.
    pub fn scale(&self, c: &BigRational) -> Self {
        self.mul(&Self::from_rational(c))
    }

    /// Multiplicative inverse.
    pub fn recip(&self) -> MathResult<Self> {
        if self.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self {
            negative: self.negative,
            radicand: self.radicand.recip(),
        })
    }

    /// Divide two radicals.
    pub fn div(&self, other: &Self) -> MathResult<Self> {
        Ok(self.mul(&other.recip()?))
    }

    /// The exact rational value, if the radicand is a perfect square.
    pub fn to_rational(&self) -> Option<BigRational> {
        let root = rational_sqrt(&self.radicand)?;
        Some(if self.negative { -root } else { root })
    }

    /// Lossy conversion for numeric sampling.
    pub fn to_f64(&self) -> f64 {
        let magnitude = to_f64(&self.radicand).sqrt();
        if self.negative { -magnitude } else { magnitude }
    }
}

impl Default for Radical {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Radical {
    /// Prints `sqrt(2/3)`, `-sqrt(2/3)`, or the rational itself when the
    /// radicand is a perfect square. `{:+}` forces a leading `+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(r) = self.to_rational() {
            return if f.sign_plus() && !r.is_negative() {
                write!(f, "+{r}")
            } else {
                write!(f, "{r}")
            };
        }
        if self.negative {
            write!(f, "-")?;
        } else if f.sign_plus() {
            write!(f, "+")?;
        }
        write!(f, "sqrt({})", self.radicand)
    }
}

impl fmt::Debug for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-sqrt({})", self.radicand)
        } else {
            write!(f, "sqrt({})", self.radicand)
        }
    }
}
