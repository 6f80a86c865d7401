//! One-stop access to a computed family.

use crate::basis::OrthonormalBasis;
use crate::coefficients::{CoefficientTable, extract_coefficients};
use crate::config::OrthoConfig;
use crate::error::OrthoResult;
use crate::gram_schmidt::orthonormalize;
use crate::sampling::{SampleGrid, SampledFunction, sample_functions};
use crate::verify::{OrthogonalityReport, verify_orthonormality};
use tracing::info;

/// A validated configuration together with its orthonormal functions and
/// their coefficient table.
///
/// Construction runs Gram-Schmidt and coefficient extraction; either both
/// succeed or nothing is returned.
#[derive(Debug, Clone)]
pub struct OrthogonalFunctions {
    config: OrthoConfig,
    basis: OrthonormalBasis,
    coefficients: CoefficientTable,
}

impl OrthogonalFunctions {
    /// Validate `config`, orthonormalize and extract coefficients.
    pub fn new(config: OrthoConfig) -> OrthoResult<Self> {
        let basis = orthonormalize(&config)?;
        let coefficients = extract_coefficients(&basis)?;
        info!(
            num_func = config.num_func,
            start_index = config.start_index,
            "coefficients extracted"
        );
        Ok(Self {
            config,
            basis,
            coefficients,
        })
    }

    /// The configuration the family was built from.
    #[inline]
    pub fn config(&self) -> &OrthoConfig {
        &self.config
    }

    /// The orthonormal functions.
    #[inline]
    pub fn functions(&self) -> &OrthonormalBasis {
        &self.basis
    }

    /// The `(alpha, coefficients)` table.
    #[inline]
    pub fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    /// Compute the orthogonality matrix.
    pub fn check(&self) -> OrthoResult<OrthogonalityReport> {
        verify_orthonormality(&self.basis)
    }

    /// Sample every function on the default grid for `(0, L]`.
    pub fn sample(&self) -> Vec<SampledFunction> {
        self.sample_on(&SampleGrid::default_for(&self.config.end_interval))
    }

    /// Sample every function on `grid`.
    pub fn sample_on(&self, grid: &SampleGrid) -> Vec<SampledFunction> {
        sample_functions(&self.basis, grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrthoError;
    use ortho_math::rational::rat;

    #[test]
    fn test_facade() {
        let family = OrthogonalFunctions::new(OrthoConfig::new(4, 1, rat(1))).unwrap();
        assert_eq!(family.functions().len(), 4);
        assert_eq!(family.coefficients().len(), 4);
        assert!(family.check().unwrap().all_orthonormal);
        assert_eq!(family.sample().len(), 4);
        assert_eq!(family.config().num_func, 4);
    }

    #[test]
    fn test_facade_rejects_invalid_config() {
        let err = OrthogonalFunctions::new(OrthoConfig::new(0, 1, rat(1))).unwrap_err();
        assert_eq!(err, OrthoError::InvalidNumFunctions(0));
    }
}
