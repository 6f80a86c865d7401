//! Error types for exact algebra.

use num_rational::BigRational;
use thiserror::Error;

/// Errors raised by exact rational, radical and polynomial arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A weighted term landed on t^-1, whose integral is logarithmic.
    #[error("term with exponent {exponent} integrates to a logarithm")]
    LogarithmicTerm {
        /// Exponent of the offending term
        exponent: BigRational,
    },

    /// The integral of t^exponent diverges at the lower bound 0.
    #[error("integral of t^{exponent} diverges at 0")]
    DivergentIntegral {
        /// Exponent of the offending term
        exponent: BigRational,
    },

    /// A boundary power is not a rational number.
    #[error("{base}^({exponent}) is not rational")]
    IrrationalPower {
        /// Base of the power
        base: BigRational,
        /// Rational exponent
        exponent: BigRational,
    },

    /// Zero raised to a non-positive exponent.
    #[error("0^({exponent}) is undefined")]
    ZeroToNonPositive {
        /// Rational exponent
        exponent: BigRational,
    },

    /// A negative number where only non-negative values are meaningful.
    #[error("negative value {value} where a non-negative one is required")]
    NegativeValue {
        /// The rejected value
        value: BigRational,
    },

    /// Integration bounds are not ordered as `0 <= lower < upper`.
    #[error("invalid integration bounds [{lower}, {upper}]")]
    InvalidBounds {
        /// Lower bound
        lower: BigRational,
        /// Upper bound
        upper: BigRational,
    },

    /// Division by an exact zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An exponent too large to expand exactly.
    #[error("exponent {0} is too large to evaluate exactly")]
    ExponentOverflow(BigRational),

    /// Text that is not a rational number.
    #[error("cannot parse '{0}' as a rational number")]
    InvalidRational(String),
}

/// Result type for exact arithmetic.
pub type MathResult<T> = Result<T, MathError>;
