//! Scalar helper tests

use segtree::math::{self, MathError};
use test_case::test_case;

#[test_case(-5, 5 ; "negative")]
#[test_case(5, 5 ; "positive")]
#[test_case(0, 0 ; "zero")]
#[test_case(i64::MIN, i64::MIN ; "minimum wraps")]
fn abs_values(input: i64, expected: i64) {
    assert_eq!(math::abs(input), expected);
}

#[test_case(&[3, 1, 4, 1, 5], 5, 1 ; "mixed")]
#[test_case(&[-2], -2, -2 ; "single")]
#[test_case(&[-9, -3, -7], -3, -9 ; "all negative")]
fn extremes(values: &[i64], max: i64, min: i64) {
    assert_eq!(math::max(values), Ok(max));
    assert_eq!(math::min(values), Ok(min));
}

#[test]
fn empty_input_is_an_error() {
    assert_eq!(math::max(&[]), Err(MathError::EmptyInput));
    assert_eq!(math::min(&[]), Err(MathError::EmptyInput));
    assert_eq!(MathError::EmptyInput.to_string(), "cannot reduce an empty list of values");
}

#[test]
fn empty_input_defaults_to_zero() {
    assert_eq!(math::max_or_default(&[]), 0);
    assert_eq!(math::min_or_default(&[]), 0);
}

#[test]
fn variadic_macros() {
    assert_eq!(segtree::max!(3, 1, 4, 1, 5), Ok(5));
    assert_eq!(segtree::min!(3, 1, 4, 1, 5), Ok(1));
}
