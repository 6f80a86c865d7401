//! Sequential Gram-Schmidt orthonormalization of the seed family.
//!
//! Step `i` takes the seed `phi_{start+i}`, subtracts its projection onto every
//! previously produced orthonormal function, and normalizes the residual.
//! Projection coefficients are taken against the original seed. Each step
//! reads all earlier results, so the process is strictly sequential.
//!
//! The run happens in the rescaled variable `u = t / L`: the measure `dt/t`
//! is scale invariant and the seeds in `u` span the same space, so the
//! result on `[0, L]` is the unit-interval family composed with `t/L`. This
//! keeps every inner product rational for any rational `L`.

use crate::basis::OrthonormalBasis;
use crate::config::OrthoConfig;
use crate::error::{OrthoError, OrthoResult};
use crate::inner_product::{inner_product, norm_squared};
use crate::interval::Interval;
use crate::seed::seed_function;
use num_rational::BigRational;
use num_traits::Signed;
use ortho_math::{Radical, RationalExponentPolynomial, ScaledPolynomial};
use tracing::{debug, info};

/// Incremental Gram-Schmidt state.
#[derive(Debug, Clone)]
pub struct GramSchmidt {
    start_index: usize,
    scale: BigRational,
    interval: Interval,
    functions: Vec<ScaledPolynomial>,
}

impl GramSchmidt {
    /// Start an empty run for seeds beginning at `start_index` over `interval`.
    pub fn new(start_index: usize, interval: &Interval) -> Self {
        Self {
            start_index,
            scale: interval.upper().clone(),
            interval: interval.rescaled(),
            functions: Vec::new(),
        }
    }

    /// Number of functions produced so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check whether no function has been produced yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Orthonormalize the next seed and append it.
    pub fn step(&mut self) -> OrthoResult<&ScaledPolynomial> {
        let seed = seed_function(self.start_index + self.functions.len());
        self.step_with(seed)
    }

    /// Orthonormalize `seed` against the functions produced so far.
    fn step_with(&mut self, seed: RationalExponentPolynomial) -> OrthoResult<&ScaledPolynomial> {
        let index = self.start_index + self.functions.len();

        let mut residual = seed.clone();
        for prev in &self.functions {
            // <seed, prev> * prev = (<seed, p_prev> * alpha_prev^2) * p_prev
            let projection =
                inner_product(&seed, prev.polynomial(), &self.interval).map_err(at_index(index))?;
            let factor = projection * prev.alpha().square();
            residual = &residual - &prev.polynomial().scale(&factor);
        }

        let norm_sq =
            norm_squared(&residual, &self.interval).map_err(at_index(index))?;
        if !norm_sq.is_positive() {
            return Err(OrthoError::DegenerateSeed { index, norm_sq });
        }

        let alpha = Radical::sqrt(norm_sq.recip())?;
        let normalized = ScaledPolynomial::new(alpha, residual).normalized();
        debug!(index, %norm_sq, function = %normalized, "orthonormalized seed");

        self.functions.push(normalized);
        Ok(&self.functions[self.functions.len() - 1])
    }

    /// Produce `num_func` functions and freeze the result.
    pub fn run(mut self, num_func: usize) -> OrthoResult<OrthonormalBasis> {
        while self.functions.len() < num_func {
            self.step()?;
        }
        Ok(self.finish())
    }

    /// Freeze the functions produced so far.
    pub fn finish(self) -> OrthonormalBasis {
        OrthonormalBasis::new(self.start_index, self.scale, self.interval, self.functions)
    }
}

/// Attach the function index to algebra errors.
fn at_index(index: usize) -> impl Fn(OrthoError) -> OrthoError {
    move |err| match err {
        OrthoError::Math(source) => OrthoError::InnerProduct { index, source },
        other => other,
    }
}

/// Validate `config` and run Gram-Schmidt for it.
pub fn orthonormalize(config: &OrthoConfig) -> OrthoResult<OrthonormalBasis> {
    config.validate()?;
    let interval = config.interval()?;
    let basis = GramSchmidt::new(config.start_index, &interval).run(config.num_func)?;
    info!(
        num_func = basis.len(),
        start_index = config.start_index,
        interval = %interval,
        "orthonormalization complete"
    );
    Ok(basis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inner_product::inner_product_scaled;
    use num_traits::Zero;
    use ortho_math::MathError;
    use ortho_math::rational::{rat, ratio};

    fn basis(num_func: usize, start_index: usize) -> OrthonormalBasis {
        orthonormalize(&OrthoConfig::new(num_func, start_index, rat(1))).unwrap()
    }

    #[test]
    fn test_first_function_is_normalized_seed() {
        let b = basis(1, 1);
        assert_eq!(b.len(), 1);
        let f = &b.functions()[0];
        assert!(f.alpha().is_one());
        assert_eq!(f.polynomial(), &seed_function(1));
    }

    #[test]
    fn test_second_function() {
        // phi_2 = -sqrt(2/3) * (6 t^(1/2) - 5 t^(1/3))
        let b = basis(2, 1);
        let f = &b.functions()[1];
        assert_eq!(f.alpha(), &Radical::new(true, ratio(2, 3)).unwrap());
        assert_eq!(f.polynomial().coeff(&ratio(1, 2)), rat(6));
        assert_eq!(f.polynomial().coeff(&ratio(1, 3)), rat(-5));
    }

    #[test]
    fn test_functions_are_orthonormal() {
        let b = basis(5, 0);
        let unit = b.working_interval();
        for (i, f) in b.functions().iter().enumerate() {
            for (j, g) in b.functions().iter().enumerate() {
                let value = inner_product_scaled(f, g, unit).unwrap();
                if i == j {
                    assert!(value.is_one(), "<{i},{i}> = {value}");
                } else {
                    assert!(value.is_zero(), "<{i},{j}> = {value}");
                }
            }
        }
    }

    #[test]
    fn test_step_is_incremental() {
        let mut gs = GramSchmidt::new(1, &Interval::unit());
        assert!(gs.is_empty());
        gs.step().unwrap();
        gs.step().unwrap();
        assert_eq!(gs.len(), 2);
        assert_eq!(gs.finish(), basis(2, 1));
    }

    #[test]
    fn test_interval_length_only_rescales_variable() {
        let unit = basis(4, 1);
        let wide = orthonormalize(&OrthoConfig::new(4, 1, rat(10))).unwrap();
        assert_eq!(wide.functions(), unit.functions());
        assert_eq!(wide.scale(), &rat(10));
        assert_eq!(wide.variable(), "(t/10)");

        let a = unit.eval_f64(2, 0.3).unwrap();
        let b = wide.eval_f64(2, 3.0).unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_dependent_seed_is_fatal() {
        let mut gs = GramSchmidt::new(1, &Interval::unit());
        gs.step().unwrap();
        gs.step().unwrap();
        // 3 t^(1/2) - 2 t^(1/3) lies in the span of the first two seeds
        let dependent = &seed_function(1).scale(&rat(3)) - &seed_function(2).scale(&rat(2));
        let err = gs.step_with(dependent).unwrap_err();
        assert!(matches!(
            err,
            OrthoError::DegenerateSeed { index: 3, ref norm_sq } if norm_sq.is_zero()
        ));
        assert_eq!(gs.len(), 2);

        let mut gs = GramSchmidt::new(0, &Interval::unit());
        let err = gs.step_with(RationalExponentPolynomial::zero()).unwrap_err();
        assert!(matches!(err, OrthoError::DegenerateSeed { index: 0, .. }));
    }

    #[test]
    fn test_irrational_boundary_power_carries_index() {
        // Rescaled to [1/2, 1]: (1/2)^(5/6) is not rational
        let interval = Interval::new(rat(2), rat(4)).unwrap();
        let mut gs = GramSchmidt::new(1, &interval);
        gs.step().unwrap();
        let err = gs.step().unwrap_err();
        assert!(matches!(
            err,
            OrthoError::InnerProduct {
                index: 2,
                source: MathError::IrrationalPower { .. }
            }
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_running() {
        let err = orthonormalize(&OrthoConfig::new(0, 1, rat(1))).unwrap_err();
        assert_eq!(err, OrthoError::InvalidNumFunctions(0));
        let err = orthonormalize(&OrthoConfig::new(3, 1, rat(-1))).unwrap_err();
        assert_eq!(err, OrthoError::InvalidEndInterval(rat(-1)));
    }
}
