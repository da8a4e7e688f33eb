//! Measures of central tendency.

use std::fmt;

use serde::Serialize;

/// Computes the arithmetic mean of the values.
///
/// # Returns
///
/// * `Some(mean)` - if the dataset contains at least one value
/// * `None` - if the dataset is empty
///
/// # Examples
///
/// ```
/// # use probstat_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(mean(&[]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Computes the median of unsorted values.
///
/// The values are copied and sorted internally. For an even number of values
/// the median is the average of the two central values.
///
/// # Returns
///
/// * `Some(median)` - if the dataset contains at least one value
/// * `None` - if the dataset is empty
///
/// # Examples
///
/// ```
/// # use probstat_stats::descriptive::median;
/// assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_of_sorted(&sorted)
}

/// Computes the median of values already sorted in ascending order.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn median_of_sorted(sorted_values: &[f64]) -> Option<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let n = sorted_values.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted_values[n / 2])
    } else {
        Some(f64::midpoint(sorted_values[n / 2 - 1], sorted_values[n / 2]))
    }
}

/// The most frequent value of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Mode {
    /// A single value that occurs more often than any value seen before it.
    Value(f64),
    /// Every value occurs exactly once (or the dataset is empty).
    None,
}

impl Mode {
    /// Returns the modal value, if any.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Mode::Value(v) => Some(v),
            Mode::None => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Value(v) => write!(f, "{}", crate::format::format_value(*v)),
            Mode::None => write!(f, "no mode"),
        }
    }
}

/// Finds the most frequent value.
///
/// Values are counted in order of first appearance. When several values share
/// the highest count, the one that appeared first wins. If no value repeats,
/// the result is [`Mode::None`].
///
/// # Examples
///
/// ```
/// # use probstat_stats::descriptive::{mode, Mode};
/// assert_eq!(mode(&[1.0, 2.0, 3.0]), Mode::None);
/// assert_eq!(mode(&[1.0, 1.0, 2.0]), Mode::Value(1.0));
/// // Tie between 2 and 1: 2 appears first
/// assert_eq!(mode(&[2.0, 1.0, 1.0, 2.0]), Mode::Value(2.0));
/// ```
#[must_use]
pub fn mode(values: &[f64]) -> Mode {
    // (value, count) in order of first appearance
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &x in values {
        match counts.iter_mut().find(|(v, _)| *v == x) {
            Some((_, count)) => *count += 1,
            None => counts.push((x, 1)),
        }
    }

    let mut best: Option<(f64, usize)> = None;
    for &(value, count) in &counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    match best {
        Some((value, count)) if count > 1 => Mode::Value(value),
        _ => Mode::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_median_does_not_require_sorted_input() {
        let values = [9.0, 2.0, 7.0, 4.0, 5.0, 1.0];
        assert_eq!(median(&values), Some(4.5));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_median_of_sorted_rejects_unsorted() {
        let _ = median_of_sorted(&[3.0, 1.0]);
    }

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(&[]), Mode::None);
    }

    #[test]
    fn test_mode_later_value_with_more_occurrences() {
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 2.0]), Mode::Value(2.0));
    }

    #[test]
    fn test_mode_negative_zero_counts_as_zero() {
        assert_eq!(mode(&[0.0, -0.0, 5.0]), Mode::Value(0.0));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::None.to_string(), "no mode");
        assert_eq!(Mode::Value(15.0).to_string(), "15");
        assert_eq!(Mode::Value(2.5).value(), Some(2.5));
    }
}
