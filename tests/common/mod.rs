#![allow(dead_code)]

/// Left-to-right fold of `values` under `merge`, `None` when empty.
pub fn naive_fold<T: Clone>(values: &[T], merge: impl Fn(&T, &T) -> T) -> Option<T> {
    let (first, rest) = values.split_first()?;
    Some(rest.iter().fold(first.clone(), |acc, v| merge(&acc, v)))
}

pub fn sum(a: &i64, b: &i64) -> i64 {
    a.wrapping_add(*b)
}

/// Non-commutative merge: exposes any operand reordering.
pub fn concat(a: &String, b: &String) -> String {
    format!("{a}{b}")
}
