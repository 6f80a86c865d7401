//! Integer coefficient extraction.
//!
//! Every orthonormal function `phi_perp_j` can be written as
//! `alpha_j * sum_i a_{j,i} * phi_{start+i}` with integer `a_{j,i}` and the
//! closed form `alpha_j = (-1)^j * sqrt(2 / (j + start + 1))`. Extraction
//! predicts `alpha_j`, divides it out and checks that what remains is an
//! integer combination of exactly the seeds `0..=j`.

use crate::basis::OrthonormalBasis;
use crate::error::{OrthoError, OrthoResult};
use crate::seed::{seed_exponent, seed_function};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use ortho_math::{Radical, RationalExponentPolynomial, ScaledPolynomial};
use std::fmt;

/// Closed-form normalization of the function at `position` when the
/// family starts at `start_index`.
pub fn predicted_alpha(position: usize, start_index: usize) -> Radical {
    let radicand = BigRational::new(BigInt::from(2), BigInt::from(position + start_index + 1));
    // The radicand is positive, so construction cannot fail.
    Radical::new(position % 2 == 1, radicand).unwrap_or_else(|_| Radical::zero())
}

/// `(alpha_j, [a_{j,0}, ..., a_{j,j}])` for one orthonormal function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientRow {
    start_index: usize,
    position: usize,
    alpha: Radical,
    coefficients: Vec<BigInt>,
}

impl CoefficientRow {
    pub(crate) fn new(start_index: usize, position: usize, alpha: Radical, coefficients: Vec<BigInt>) -> Self {
        Self {
            start_index,
            position,
            alpha,
            coefficients,
        }
    }

    /// Sum of the coefficients, i.e. the value of the un-normalized function at `t = 1`.
    pub fn coefficient_sum(&self) -> BigInt {
        self.coefficients
            .iter()
            .fold(BigInt::zero(), |acc, a| acc + a)
    }

    /// Check whether the row is the single seed `[1]`.
    pub fn is_seed(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_one()
    }

    /// Function index `start_index + position`.
    #[inline]
    pub fn index(&self) -> usize {
        self.start_index + self.position
    }

    /// Position in the list, `j`.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The normalization `alpha_j`.
    #[inline]
    pub fn alpha(&self) -> &Radical {
        &self.alpha
    }

    /// Denominator `j + start + 1` under the radical of the closed form.
    #[inline]
    pub fn alpha_denominator(&self) -> usize {
        self.position + self.start_index + 1
    }

    /// `a_{j,0} ..= a_{j,j}`, ordered by seed index.
    #[inline]
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// `alpha_j` written as `±sqrt(2/(j+start+1))` without reducing the fraction.
    pub fn alpha_text(&self) -> String {
        let sign = if self.alpha.is_negative() { '-' } else { '+' };
        format!("{sign}sqrt(2/{})", self.alpha_denominator())
    }

    /// Rebuild `alpha_j * sum_i a_{j,i} * phi_{start+i}`.
    pub fn reconstruct(&self) -> ScaledPolynomial {
        let poly = self
            .coefficients
            .iter()
            .enumerate()
            .fold(RationalExponentPolynomial::zero(), |acc, (i, a)| {
                let term = seed_function(self.start_index + i)
                    .scale(&BigRational::from_integer(a.clone()));
                &acc + &term
            });
        ScaledPolynomial::new(self.alpha.clone(), poly)
    }
}

impl fmt::Display for CoefficientRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs: Vec<String> = self.coefficients.iter().map(ToString::to_string).collect();
        write!(
            f,
            "i = {}:  {:>11}  [{}]",
            self.index(),
            self.alpha_text(),
            coeffs.join(", ")
        )
    }
}

/// The triangular table of rows for a whole basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoefficientTable {
    rows: Vec<CoefficientRow>,
}

impl CoefficientTable {
    /// Rows, one per function.
    #[inline]
    pub fn rows(&self) -> &[CoefficientRow] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check for an empty table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, CoefficientRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a CoefficientTable {
    type Item = &'a CoefficientRow;
    type IntoIter = std::slice::Iter<'a, CoefficientRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Extract the coefficient row of every function in `basis`.
pub fn extract_coefficients(basis: &OrthonormalBasis) -> OrthoResult<CoefficientTable> {
    let start_index = basis.start_index();
    let rows = basis
        .functions()
        .iter()
        .enumerate()
        .map(|(position, f)| extract_row(f, position, start_index))
        .collect::<OrthoResult<Vec<_>>>()?;
    Ok(CoefficientTable { rows })
}

fn extract_row(
    f: &ScaledPolynomial,
    position: usize,
    start_index: usize,
) -> OrthoResult<CoefficientRow> {
    let index = start_index + position;
    let alpha = predicted_alpha(position, start_index);

    // f / alpha = (alpha_f / alpha) * p, which is a plain polynomial only if
    // the predicted radical matches the computed one up to a rational.
    let ratio = f
        .alpha()
        .div(&alpha)?
        .to_rational()
        .ok_or_else(|| OrthoError::AlphaMismatch {
            index,
            predicted: alpha.clone(),
            actual: f.alpha().clone(),
        })?;
    let candidate = f.polynomial().scale(&ratio);

    let expected: Vec<BigRational> = (0..=position)
        .map(|i| seed_exponent(start_index + i))
        .collect();
    let mut found: Vec<BigRational> = candidate.exponents().cloned().collect();
    found.sort();
    let mut wanted = expected.clone();
    wanted.sort();
    if found != wanted {
        return Err(OrthoError::UnexpectedExponents {
            index,
            found: join(&found),
            expected: join(&wanted),
        });
    }

    let coefficients = expected
        .into_iter()
        .map(|exponent| {
            let value = candidate.coeff(&exponent);
            if value.is_integer() {
                Ok(value.to_integer())
            } else {
                Err(OrthoError::NonIntegerCoefficient {
                    index,
                    exponent,
                    value,
                })
            }
        })
        .collect::<OrthoResult<Vec<_>>>()?;

    Ok(CoefficientRow::new(start_index, position, alpha, coefficients))
}

fn join(values: &[BigRational]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
