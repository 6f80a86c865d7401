//! Error types for the orthogonalization pipeline.
//!
//! Input errors (`Invalid*`) are user mistakes caught before any computation.
//! Every other variant is an algorithmic defect: the pipeline is exact, so
//! these abort the run instead of degrading to an approximation.

use num_rational::BigRational;
use ortho_math::{MathError, Radical};
use thiserror::Error;

/// Errors raised while building, extracting or verifying orthonormal functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrthoError {
    /// Fewer than one function requested.
    #[error("the number of functions should be at least 1, got {0}")]
    InvalidNumFunctions(i64),

    /// Negative start index.
    #[error("the start index should be at least 0, got {0}")]
    InvalidStartIndex(i64),

    /// Non-positive interval end.
    #[error("the end of the interval should be greater than zero, got {0}")]
    InvalidEndInterval(BigRational),

    /// Interval bounds not satisfying `0 <= lower < upper`.
    #[error("invalid interval [{lower}, {upper}]")]
    InvalidInterval {
        /// Lower bound
        lower: BigRational,
        /// Upper bound
        upper: BigRational,
    },

    /// An inner product failed while processing a function.
    #[error("inner product failed for function {index}: {source}")]
    InnerProduct {
        /// Function index (including the start offset)
        index: usize,
        /// Underlying algebra error
        #[source]
        source: MathError,
    },

    /// A seed is linearly dependent on its predecessors.
    #[error("function {index} has non-positive squared norm {norm_sq}")]
    DegenerateSeed {
        /// Function index
        index: usize,
        /// The computed squared norm
        norm_sq: BigRational,
    },

    /// The closed-form normalization does not match the computed one.
    #[error("function {index}: predicted alpha {predicted} does not divide {actual} rationally")]
    AlphaMismatch {
        /// Function index
        index: usize,
        /// Closed-form alpha
        predicted: Radical,
        /// Alpha produced by Gram-Schmidt
        actual: Radical,
    },

    /// The normalized function is not a combination of exactly the expected seeds.
    #[error("function {index} has exponents [{found}], expected [{expected}]")]
    UnexpectedExponents {
        /// Function index
        index: usize,
        /// Exponents present
        found: String,
        /// Seed exponents expected
        expected: String,
    },

    /// A coefficient that should be an integer is fractional.
    #[error("function {index}: coefficient {value} of t^({exponent}) is not an integer")]
    NonIntegerCoefficient {
        /// Function index
        index: usize,
        /// Exponent of the offending seed
        exponent: BigRational,
        /// The fractional coefficient
        value: BigRational,
    },

    /// The mutual inner product matrix is not the identity.
    #[error("functions are not mutually orthonormal: {defects} defective entries")]
    NotOrthonormal {
        /// Number of entries differing from the identity
        defects: usize,
    },

    /// Algebra error outside a specific function.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type for the orthogonalization pipeline.
pub type OrthoResult<T> = Result<T, OrthoError>;
