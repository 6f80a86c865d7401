//! The ordered, immutable result of an orthonormalization run.

use crate::interval::Interval;
use num_rational::BigRational;
use num_traits::One;
use ortho_math::ScaledPolynomial;
use ortho_math::rational::to_f64;

/// Orthonormal functions `phi_perp_i` for `i = start_index .. start_index + N`.
///
/// Each function is stored in the rescaled variable `u = t / scale`, where
/// `scale` is the right end `L` of the requested interval. Inner products
/// between stored polynomials are taken over [`OrthonormalBasis::working_interval`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthonormalBasis {
    start_index: usize,
    scale: BigRational,
    working_interval: Interval,
    functions: Vec<ScaledPolynomial>,
}

impl OrthonormalBasis {
    pub(crate) fn new(
        start_index: usize,
        scale: BigRational,
        working_interval: Interval,
        functions: Vec<ScaledPolynomial>,
    ) -> Self {
        Self {
            start_index,
            scale,
            working_interval,
            functions,
        }
    }

    /// Index of the first function.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Variable scale `L`.
    #[inline]
    pub fn scale(&self) -> &BigRational {
        &self.scale
    }

    /// Interval in the rescaled variable over which the stored functions are orthonormal.
    #[inline]
    pub fn working_interval(&self) -> &Interval {
        &self.working_interval
    }

    /// Number of functions.
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check for an empty basis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// All functions, position `j` holding function index `start_index + j`.
    #[inline]
    pub fn functions(&self) -> &[ScaledPolynomial] {
        &self.functions
    }

    /// Function at position `j`.
    pub fn get(&self, position: usize) -> Option<&ScaledPolynomial> {
        self.functions.get(position)
    }

    /// Iterate over `(function index, function)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ScaledPolynomial)> {
        self.functions
            .iter()
            .enumerate()
            .map(move |(j, f)| (self.start_index + j, f))
    }

    /// Printable name of the variable the functions are written in.
    pub fn variable(&self) -> String {
        if self.scale.is_one() {
            "t".to_string()
        } else if self.scale.is_integer() {
            format!("(t/{})", self.scale)
        } else {
            format!("(t/({}))", self.scale)
        }
    }

    /// Evaluate the function at position `j` at `t` (in the original variable).
    pub fn eval_f64(&self, position: usize, t: f64) -> Option<f64> {
        let f = self.functions.get(position)?;
        Some(f.eval_f64(t / to_f64(&self.scale)))
    }

    /// `phi_i(t) = ...` for the function at position `j`.
    pub fn describe(&self, position: usize) -> Option<String> {
        let f = self.functions.get(position)?;
        let var = self.variable();
        Some(format!(
            "phi_{}(t) = {}",
            self.start_index + position,
            f.display_with(&var)
        ))
    }
}
