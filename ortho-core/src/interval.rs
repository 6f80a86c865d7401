//! Integration intervals.

use crate::error::{OrthoError, OrthoResult};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// A closed interval `[lower, upper]` with `0 <= lower < upper`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    lower: BigRational,
    upper: BigRational,
}

impl Interval {
    /// Create a new interval, checking `0 <= lower < upper`.
    pub fn new(lower: BigRational, upper: BigRational) -> OrthoResult<Self> {
        if lower.is_negative() || lower >= upper {
            return Err(OrthoError::InvalidInterval { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// `[0, length]`.
    pub fn from_origin(length: BigRational) -> OrthoResult<Self> {
        if !length.is_positive() {
            return Err(OrthoError::InvalidEndInterval(length));
        }
        Ok(Self {
            lower: BigRational::zero(),
            upper: length,
        })
    }

    /// `[0, 1]`.
    pub fn unit() -> Self {
        Self {
            lower: BigRational::zero(),
            upper: BigRational::one(),
        }
    }

    /// Lower bound.
    #[inline]
    pub fn lower(&self) -> &BigRational {
        &self.lower
    }

    /// Upper bound.
    #[inline]
    pub fn upper(&self) -> &BigRational {
        &self.upper
    }

    /// `upper - lower`.
    pub fn length(&self) -> BigRational {
        &self.upper - &self.lower
    }

    /// Check for `[0, 1]`.
    pub fn is_unit(&self) -> bool {
        self.lower.is_zero() && self.upper.is_one()
    }

    /// The interval seen through the substitution `u = t / upper`.
    ///
    /// The weight `dt/t` is invariant under this scaling, so inner products
    /// over `self` of `f(t/upper)` equal inner products over the result of `f(u)`.
    pub fn rescaled(&self) -> Self {
        Self {
            lower: &self.lower / &self.upper,
            upper: BigRational::one(),
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortho_math::rational::{rat, ratio};

    #[test]
    fn test_new_validates_bounds() {
        assert!(Interval::new(rat(0), rat(1)).is_ok());
        assert!(Interval::new(rat(1), rat(1)).is_err());
        assert!(Interval::new(rat(-1), rat(1)).is_err());
    }

    #[test]
    fn test_from_origin_rejects_non_positive() {
        assert_eq!(
            Interval::from_origin(rat(0)),
            Err(OrthoError::InvalidEndInterval(rat(0)))
        );
        assert!(Interval::from_origin(rat(-3)).is_err());
    }

    #[test]
    fn test_rescaled() {
        let i = Interval::new(rat(2), rat(8)).unwrap();
        let r = i.rescaled();
        assert_eq!(r.lower(), &ratio(1, 4));
        assert_eq!(r.upper(), &rat(1));
        assert!(Interval::from_origin(rat(10)).unwrap().rescaled().is_unit());
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::from_origin(ratio(5, 2)).unwrap().to_string(), "[0, 5/2]");
    }
}
