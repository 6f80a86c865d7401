//! Exact rational helpers.
//!
//! Perfect-power roots, rational powers of rationals and exact parsing of
//! decimal, fractional and scientific notation.

use crate::error::{MathError, MathResult};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Shorthand for an integer-valued rational.
#[inline]
pub fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Shorthand for `n / d`.
///
/// # Panics
/// Panics if `d` is zero.
#[inline]
pub fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Exact `k`-th root of a non-negative integer, or `None` if `n` is not a
/// perfect `k`-th power.
pub fn integer_nth_root(n: &BigInt, k: u32) -> Option<BigInt> {
    if n.is_negative() || k == 0 {
        return None;
    }
    if k == 1 || n.is_zero() || n.is_one() {
        return Some(n.clone());
    }

    let root = n.nth_root(k);
    if root.pow(k) == *n { Some(root) } else { None }
}

/// Square root of a rational if it is the square of another rational.
pub fn rational_sqrt(r: &BigRational) -> Option<BigRational> {
    if r.is_negative() {
        return None;
    }
    let numer = integer_nth_root(r.numer(), 2)?;
    let denom = integer_nth_root(r.denom(), 2)?;
    Some(BigRational::new(numer, denom))
}

/// Raise a rational to a non-negative integer power.
pub fn rational_powi(base: &BigRational, power: u32) -> BigRational {
    BigRational::new(base.numer().pow(power), base.denom().pow(power))
}

/// Compute `base^exponent` exactly.
///
/// Succeeds only when the result is rational, i.e. both the numerator and
/// denominator of `base` are perfect powers of the exponent's denominator.
pub fn rational_pow(base: &BigRational, exponent: &BigRational) -> MathResult<BigRational> {
    if base.is_negative() {
        return Err(MathError::NegativeValue {
            value: base.clone(),
        });
    }
    if base.is_zero() {
        return if exponent.is_positive() {
            Ok(BigRational::zero())
        } else {
            Err(MathError::ZeroToNonPositive {
                exponent: exponent.clone(),
            })
        };
    }
    if exponent.is_zero() || base.is_one() {
        return Ok(BigRational::one());
    }

    let irrational = || MathError::IrrationalPower {
        base: base.clone(),
        exponent: exponent.clone(),
    };

    // Denominators of a normalized BigRational are positive.
    let root_degree = exponent.denom().to_u32().ok_or_else(irrational)?;
    let numer = integer_nth_root(base.numer(), root_degree).ok_or_else(irrational)?;
    let denom = integer_nth_root(base.denom(), root_degree).ok_or_else(irrational)?;
    let root = BigRational::new(numer, denom);

    let power = exponent
        .numer()
        .abs()
        .to_u32()
        .ok_or_else(|| MathError::ExponentOverflow(exponent.clone()))?;
    let powered = rational_powi(&root, power);

    if exponent.is_negative() {
        Ok(powered.recip())
    } else {
        Ok(powered)
    }
}

/// Lossy conversion for numeric sampling; `NaN` if the value does not fit.
#[inline]
pub fn to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Largest decimal exponent `parse_rational` accepts, in absolute value.
pub const MAX_DECIMAL_EXPONENT: u32 = 10_000;

/// Parse a rational number exactly.
///
/// Accepts integers (`10`), decimals (`2.5`, `.5`), scientific notation
/// (`1e-3`, `2.5E2`) and fractions of any of these (`1/3`, `2.5/7`).
pub fn parse_rational(text: &str) -> MathResult<BigRational> {
    let text = text.trim();
    match text.split_once('/') {
        Some((numer, denom)) => {
            let numer = parse_decimal(numer.trim(), text)?;
            let denom = parse_decimal(denom.trim(), text)?;
            if denom.is_zero() {
                return Err(MathError::DivisionByZero);
            }
            Ok(numer / denom)
        }
        None => parse_decimal(text, text),
    }
}

fn parse_decimal(text: &str, original: &str) -> MathResult<BigRational> {
    let invalid = || MathError::InvalidRational(original.to_string());

    let (mantissa, exponent) = match text.find(|c| c == 'e' || c == 'E') {
        Some(pos) => {
            let exponent: i32 = text[pos + 1..].parse().map_err(|_| invalid())?;
            if exponent.unsigned_abs() > MAX_DECIMAL_EXPONENT {
                return Err(invalid());
            }
            (&text[..pos], exponent)
        }
        None => (text, 0),
    };

    let (negative, digits) = if let Some(rest) = mantissa.strip_prefix('-') {
        (true, rest)
    } else {
        (false, mantissa.strip_prefix('+').unwrap_or(mantissa))
    };

    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let all_digits = format!("{int_part}{frac_part}");
    let mut numer = BigInt::parse_bytes(all_digits.as_bytes(), 10).ok_or_else(invalid)?;
    if negative {
        numer = -numer;
    }

    let scale = i64::from(exponent) - frac_part.len() as i64;
    let ten = BigInt::from(10);
    let magnitude = u32::try_from(scale.unsigned_abs()).map_err(|_| invalid())?;
    let factor = ten.pow(magnitude);

    Ok(if scale >= 0 {
        BigRational::from_integer(numer * factor)
    } else {
        BigRational::new(numer, factor)
    })
}
