//! Summary helpers used when logging episode statistics.

use std::fmt::Debug;

/// Maximum of `values`, or NaN when `values` is empty.
///
/// A NaN element makes the result NaN. Used for logging only.
pub fn safe_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .reduce(|a, b| if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) })
        .unwrap_or(f64::NAN)
}

/// Minimum of `values`, or NaN when `values` is empty.
///
/// A NaN element makes the result NaN. Used for logging only.
pub fn safe_min(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .reduce(|a, b| if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) })
        .unwrap_or(f64::NAN)
}

/// `Debug`-format `value` with every whitespace character removed.
///
/// Keeps arrays and detection rows on a single log line.
pub fn compact_format<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}").split_whitespace().collect()
}
