//! Floating-point sampling of orthonormal functions for plotting.
//!
//! Nothing exact depends on these values.

use crate::basis::OrthonormalBasis;
use num_rational::BigRational;
use ortho_math::rational::to_f64;
use serde::Serialize;

/// Left end of the default grid.
pub const DEFAULT_GRID_START: f64 = 1e-7;

/// Decades covered by the default grid when `L` is at or below [`DEFAULT_GRID_START`].
pub const DEFAULT_GRID_DECADES: i32 = 7;

/// Number of points in the default grid.
pub const DEFAULT_GRID_POINTS: usize = 1000;

/// Abscissae at which functions are evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleGrid {
    points: Vec<f64>,
}

impl SampleGrid {
    /// `count` points evenly spaced in `log10(t)` from `start` to `end`, inclusive.
    ///
    /// Returns an empty grid when `start` or `end` is not positive, or when
    /// `start >= end` with more than one point requested.
    pub fn log_spaced(start: f64, end: f64, count: usize) -> Self {
        if !(start > 0.0 && end > 0.0) || count == 0 || (count > 1 && start >= end) {
            return Self { points: Vec::new() };
        }
        if count == 1 {
            return Self { points: vec![end] };
        }
        let (lo, hi) = (start.log10(), end.log10());
        let step = (hi - lo) / (count - 1) as f64;
        let mut points: Vec<f64> = (0..count)
            .map(|k| 10f64.powf(lo + step * k as f64))
            .collect();
        // Pin the end points against rounding in powf.
        points[0] = start;
        points[count - 1] = end;
        Self { points }
    }

    /// The default grid on `(0, L]`: `1e-7 ..= L` with 1000 points.
    ///
    /// For `L <= 1e-7` the grid starts seven decades below `L` instead.
    pub fn default_for(end_interval: &BigRational) -> Self {
        let end = to_f64(end_interval);
        let start = if end > DEFAULT_GRID_START {
            DEFAULT_GRID_START
        } else {
            end * 10f64.powi(-DEFAULT_GRID_DECADES)
        };
        Self::log_spaced(start, end, DEFAULT_GRID_POINTS)
    }

    /// Grid points.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check for an empty grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One function sampled on a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledFunction {
    /// Function index `i`.
    pub index: usize,
    /// `(t, phi_perp_i(t))` pairs.
    pub points: Vec<(f64, f64)>,
}

/// Evaluate every function of `basis` at every point of `grid`.
pub fn sample_functions(basis: &OrthonormalBasis, grid: &SampleGrid) -> Vec<SampledFunction> {
    basis
        .iter()
        .enumerate()
        .map(|(position, (index, _))| SampledFunction {
            index,
            points: grid
                .points()
                .iter()
                .filter_map(|&t| basis.eval_f64(position, t).map(|y| (t, y)))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrthoConfig;
    use crate::gram_schmidt::orthonormalize;
    use ortho_math::rational::{rat, ratio};

    #[test]
    fn test_log_spaced() {
        let grid = SampleGrid::log_spaced(1e-3, 1.0, 4);
        assert_eq!(grid.len(), 4);
        let expected = [1e-3, 1e-2, 1e-1, 1.0];
        for (p, e) in grid.points().iter().zip(expected) {
            assert!((p - e).abs() < 1e-12 * e.max(1.0), "{p} vs {e}");
        }
    }

    #[test]
    fn test_log_spaced_degenerate() {
        assert!(SampleGrid::log_spaced(0.0, 1.0, 10).is_empty());
        assert!(SampleGrid::log_spaced(1.0, 0.5, 10).is_empty());
        assert!(SampleGrid::log_spaced(1e-3, 1.0, 0).is_empty());
        assert_eq!(SampleGrid::log_spaced(1e-3, 2.0, 1).points(), &[2.0]);
    }

    #[test]
    fn test_default_grid() {
        let grid = SampleGrid::default_for(&rat(5));
        assert_eq!(grid.len(), DEFAULT_GRID_POINTS);
        assert_eq!(grid.points()[0], DEFAULT_GRID_START);
        assert_eq!(grid.points()[DEFAULT_GRID_POINTS - 1], 5.0);
    }

    #[test]
    fn test_default_grid_below_start() {
        let end = ratio(1, 100_000_000);
        let grid = SampleGrid::default_for(&end);
        assert_eq!(grid.len(), DEFAULT_GRID_POINTS);
        assert_eq!(grid.points()[DEFAULT_GRID_POINTS - 1], 1e-8);
        assert!(grid.points()[0] < 1e-8);
        assert!(grid.points().windows(2).all(|w| w[0] < w[1]));

        let basis = orthonormalize(&OrthoConfig::new(2, 1, end)).unwrap();
        let samples = sample_functions(&basis, &grid);
        assert_eq!(samples[0].points.len(), DEFAULT_GRID_POINTS);
        // phi_perp_1(L) = 1 in the rescaled variable
        let (_, y) = samples[0].points[DEFAULT_GRID_POINTS - 1];
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_grid_at_start() {
        let grid = SampleGrid::default_for(&ratio(1, 10_000_000));
        assert_eq!(grid.len(), DEFAULT_GRID_POINTS);
        assert!(grid.points()[0] < grid.points()[DEFAULT_GRID_POINTS - 1]);
    }

    #[test]
    fn test_sample_functions() {
        let basis = orthonormalize(&OrthoConfig::new(3, 1, rat(1))).unwrap();
        let grid = SampleGrid::log_spaced(1e-4, 1.0, 50);
        let samples = sample_functions(&basis, &grid);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2].index, 3);
        assert_eq!(samples[0].points.len(), 50);

        // phi_perp_1(1) = 1 and phi_perp_2(1) = -sqrt(2/3)
        let (t, y) = samples[0].points[49];
        assert_eq!(t, 1.0);
        assert!((y - 1.0).abs() < 1e-12);
        let (_, y) = samples[1].points[49];
        assert!((y + (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }
}
