//! Scalar arithmetic helpers
//!
//! `max`/`min` take a slice; the [`max!`](crate::max) and [`min!`](crate::min)
//! macros give them a variadic call site.

use thiserror::Error;

/// Errors raised by the scalar helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// `max`/`min` called without any operands.
    #[error("cannot reduce an empty list of values")]
    EmptyInput,
}

/// Absolute value.
///
/// `abs(i64::MIN)` wraps to `i64::MIN` instead of overflowing.
#[inline]
pub fn abs(a: i64) -> i64 {
    a.wrapping_abs()
}

/// Largest value in `values`.
pub fn max(values: &[i64]) -> Result<i64, MathError> {
    reduce(values, |candidate, best| candidate > best)
}

/// Smallest value in `values`.
pub fn min(values: &[i64]) -> Result<i64, MathError> {
    reduce(values, |candidate, best| candidate < best)
}

/// Like [`max`], but returns `0` for empty input.
pub fn max_or_default(values: &[i64]) -> i64 {
    max(values).unwrap_or_default()
}

/// Like [`min`], but returns `0` for empty input.
pub fn min_or_default(values: &[i64]) -> i64 {
    min(values).unwrap_or_default()
}

// First element wins on ties.
fn reduce(values: &[i64], replaces: impl Fn(i64, i64) -> bool) -> Result<i64, MathError> {
    let (&first, rest) = values.split_first().ok_or(MathError::EmptyInput)?;
    Ok(rest
        .iter()
        .fold(first, |best, &v| if replaces(v, best) { v } else { best }))
}

/// Variadic [`max`](crate::math::max): `max!(3, 1, 4) == Ok(4)`.
#[macro_export]
macro_rules! max {
    ($($value:expr),* $(,)?) => {
        $crate::math::max(&[$($value),*])
    };
}

/// Variadic [`min`](crate::math::min): `min!(3, 1, 4) == Ok(1)`.
#[macro_export]
macro_rules! min {
    ($($value:expr),* $(,)?) => {
        $crate::math::min(&[$($value),*])
    };
}
