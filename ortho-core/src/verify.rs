//! Exact orthonormality check of a computed basis.
//!
//! Each entry of the mutual inner product matrix is classified as exactly
//! one, exactly zero, or anything else. Only the lower triangle is computed
//! and mirrored. The pairs are independent and are evaluated in parallel.

use crate::basis::OrthonormalBasis;
use crate::error::{OrthoError, OrthoResult};
use crate::inner_product::inner_product_scaled;
use ortho_math::Radical;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Classification of one inner product value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum InnerProductClass {
    /// Neither zero nor one.
    Other = -1,
    /// Exactly zero.
    Zero = 0,
    /// Exactly one.
    Unit = 1,
}

impl InnerProductClass {
    /// Classify an exact value.
    pub fn classify(value: &Radical) -> Self {
        if value.is_one() {
            Self::Unit
        } else if value.is_zero() {
            Self::Zero
        } else {
            Self::Other
        }
    }

    /// Matrix entry `1`, `0` or `-1`.
    #[inline]
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

/// Symmetric `N x N` matrix over `{-1, 0, 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrthogonalityMatrix {
    entries: Vec<Vec<i8>>,
}

impl OrthogonalityMatrix {
    /// Build from rows.
    pub fn from_rows(entries: Vec<Vec<i8>>) -> Self {
        Self { entries }
    }

    /// Matrix dimension.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Entry at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Option<i8> {
        self.entries.get(i)?.get(j).copied()
    }

    /// Rows of the matrix.
    #[inline]
    pub fn rows(&self) -> &[Vec<i8>] {
        &self.entries
    }

    /// Number of entries that differ from the identity.
    pub fn defects(&self) -> usize {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, &v)| v != i8::from(i == j))
                    .count()
            })
            .sum()
    }

    /// Check whether the matrix is the identity.
    pub fn is_identity(&self) -> bool {
        self.defects() == 0
    }
}

impl fmt::Display for OrthogonalityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.entries.len();
        let width = if self.entries.iter().flatten().any(|&v| v < 0) { 2 } else { 1 };
        for (i, row) in self.entries.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
            let open = if i == 0 { "[[" } else { " [" };
            let close = if i + 1 == n { "]]" } else { "]" };
            write!(f, "{open}{}{close}", cells.join(" "))?;
            if i + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Matrix plus the overall verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrthogonalityReport {
    /// Classified inner products.
    pub matrix: OrthogonalityMatrix,
    /// `true` iff the matrix is the identity.
    pub all_orthonormal: bool,
}

impl OrthogonalityReport {
    /// Turn a failed verdict into an error.
    pub fn into_result(self) -> OrthoResult<OrthogonalityMatrix> {
        if self.all_orthonormal {
            Ok(self.matrix)
        } else {
            Err(OrthoError::NotOrthonormal {
                defects: self.matrix.defects(),
            })
        }
    }
}

/// Compute and classify every mutual inner product of `basis`.
pub fn verify_orthonormality(basis: &OrthonormalBasis) -> OrthoResult<OrthogonalityReport> {
    let n = basis.len();
    let functions = basis.functions();
    let interval = basis.working_interval();

    let pairs: Vec<(usize, usize)> = (0..n).flat_map(|i| (0..=i).map(move |j| (i, j))).collect();
    let classified = pairs
        .par_iter()
        .map(|&(i, j)| -> OrthoResult<(usize, usize, InnerProductClass)> {
            let value = inner_product_scaled(&functions[i], &functions[j], interval)?;
            Ok((i, j, InnerProductClass::classify(&value)))
        })
        .collect::<OrthoResult<Vec<_>>>()?;

    let mut entries = vec![vec![0i8; n]; n];
    for (i, j, class) in classified {
        entries[i][j] = class.as_i8();
        entries[j][i] = class.as_i8();
    }

    let matrix = OrthogonalityMatrix::from_rows(entries);
    let all_orthonormal = matrix.is_identity();
    info!(size = n, all_orthonormal, "orthogonality check complete");
    Ok(OrthogonalityReport {
        matrix,
        all_orthonormal,
    })
}
