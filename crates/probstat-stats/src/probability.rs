//! Empirical probability of simple threshold events.

use std::str::FromStr;

use serde::Serialize;

use crate::{format::format_value, sample::Sample};

/// Comparison used to define an event `x ⋈ k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// `x ≥ k`
    #[display("x ≥ k")]
    AtLeast,
    /// `x ≤ k`
    #[display("x ≤ k")]
    AtMost,
    /// `x = k`
    #[display("x = k")]
    Equal,
}

impl Comparator {
    /// Returns whether `x` satisfies the comparison against `k`.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn matches(self, x: f64, k: f64) -> bool {
        match self {
            Comparator::AtLeast => x >= k,
            Comparator::AtMost => x <= k,
            Comparator::Equal => x == k,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown event type '{input}' (expected ge, le or eq)")]
pub struct ParseComparatorError {
    input: String,
}

impl FromStr for Comparator {
    type Err = ParseComparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ge" | ">=" | "≥" => Ok(Comparator::AtLeast),
            "le" | "<=" | "≤" => Ok(Comparator::AtMost),
            "eq" | "=" | "==" => Ok(Comparator::Equal),
            other => Err(ParseComparatorError {
                input: other.to_string(),
            }),
        }
    }
}

/// Counts the values satisfying `x ⋈ k`.
///
/// # Examples
///
/// ```
/// use probstat_stats::probability::{Comparator, count_event};
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(count_event(&data, Comparator::AtLeast, 3.0), 2);
/// assert_eq!(count_event(&data, Comparator::AtMost, 3.0), 3);
/// assert_eq!(count_event(&data, Comparator::Equal, 2.5), 0);
/// ```
#[must_use]
pub fn count_event(data: &[f64], comparator: Comparator, k: f64) -> usize {
    data.iter().filter(|&&x| comparator.matches(x, k)).count()
}

/// The empirical probability of an event over a sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventProbability {
    pub comparator: Comparator,
    pub threshold: f64,
    /// Number of values satisfying the event.
    pub favorable: usize,
    /// Sample size.
    pub total: usize,
    /// `favorable / total`.
    pub probability: f64,
}

impl EventProbability {
    /// Computes the observed frequency of `x ⋈ k` in the sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstat_stats::{probability::{Comparator, EventProbability}, sample::Sample};
    ///
    /// let sample = Sample::new((1..=20).map(f64::from).collect()).unwrap();
    /// let event = EventProbability::compute(&sample, Comparator::AtLeast, 16.0);
    /// assert_eq!(event.favorable, 5);
    /// assert_eq!(event.probability, 0.25);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn compute(sample: &Sample, comparator: Comparator, threshold: f64) -> Self {
        let favorable = count_event(sample.values(), comparator, threshold);
        let total = sample.len();
        Self {
            comparator,
            threshold,
            favorable,
            total,
            probability: favorable as f64 / total as f64,
        }
    }

    /// Human-readable event description such as `x ≥ k with k=40`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} with k={}", self.comparator, format_value(self.threshold))
    }
}
