//! Run configuration and input validation.

use crate::error::{OrthoError, OrthoResult};
use crate::interval::Interval;
use num_rational::BigRational;
use num_traits::{One, Signed};

/// Default number of functions.
pub const DEFAULT_NUM_FUNC: usize = 9;

/// Default index of the first seed function.
pub const DEFAULT_START_INDEX: usize = 1;

/// The validated triple `(N, start_index, L)` a run is driven by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthoConfig {
    /// Number of orthonormal functions to generate.
    pub num_func: usize,
    /// Index of the first seed `t^(1/(start_index+1))`.
    pub start_index: usize,
    /// Right end `L` of the interval `[0, L]`.
    pub end_interval: BigRational,
}

impl Default for OrthoConfig {
    fn default() -> Self {
        Self {
            num_func: DEFAULT_NUM_FUNC,
            start_index: DEFAULT_START_INDEX,
            end_interval: BigRational::one(),
        }
    }
}

impl OrthoConfig {
    /// Create a configuration without validating it.
    pub fn new(num_func: usize, start_index: usize, end_interval: BigRational) -> Self {
        Self {
            num_func,
            start_index,
            end_interval,
        }
    }

    /// Validate raw user input, which may be out of range, into a configuration.
    pub fn from_raw(
        num_func: i64,
        start_index: i64,
        end_interval: BigRational,
    ) -> OrthoResult<Self> {
        let num_func = usize::try_from(num_func)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or(OrthoError::InvalidNumFunctions(num_func))?;
        let start_index =
            usize::try_from(start_index).map_err(|_| OrthoError::InvalidStartIndex(start_index))?;

        let config = Self::new(num_func, start_index, end_interval);
        config.validate()?;
        Ok(config)
    }

    /// Set the number of functions.
    #[must_use]
    pub fn with_num_func(mut self, num_func: usize) -> Self {
        self.num_func = num_func;
        self
    }

    /// Set the start index.
    #[must_use]
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Set the interval end.
    #[must_use]
    pub fn with_end_interval(mut self, end_interval: BigRational) -> Self {
        self.end_interval = end_interval;
        self
    }

    /// Check `N >= 1` and `L > 0`.
    pub fn validate(&self) -> OrthoResult<()> {
        if self.num_func < 1 {
            return Err(OrthoError::InvalidNumFunctions(self.num_func as i64));
        }
        if !self.end_interval.is_positive() {
            return Err(OrthoError::InvalidEndInterval(self.end_interval.clone()));
        }
        Ok(())
    }

    /// The interval `[0, L]`.
    pub fn interval(&self) -> OrthoResult<Interval> {
        Interval::from_origin(self.end_interval.clone())
    }

    /// Function indices covered, `start_index .. start_index + num_func`.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start_index..self.start_index + self.num_func
    }
}
