//! Validated samples and their summary measures.

use serde::Serialize;

use crate::{
    descriptive::{self, Mode},
    error::ValidationError,
    parse,
};

/// Minimum number of values required before statistics are computed.
pub const MIN_SAMPLE_SIZE: usize = 20;

/// A validated sample of finite values, in input order.
///
/// Construction checks that the sample holds at least [`MIN_SAMPLE_SIZE`]
/// values. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Creates a sample from already parsed values.
    ///
    /// # Panics
    ///
    /// Panics if any value is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use probstat_stats::sample::Sample;
    /// let values = (1..=20).map(f64::from).collect::<Vec<_>>();
    /// let sample = Sample::new(values).unwrap();
    /// assert_eq!(sample.len(), 20);
    ///
    /// assert!(Sample::new(vec![1.0, 2.0]).is_err());
    /// ```
    pub fn new(values: Vec<f64>) -> Result<Self, ValidationError> {
        assert!(
            values.iter().all(|v| v.is_finite()),
            "sample values must be finite"
        );
        if values.len() < MIN_SAMPLE_SIZE {
            return Err(ValidationError::SampleTooSmall {
                required: MIN_SAMPLE_SIZE,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Parses free text and validates the resulting sample.
    ///
    /// Tokens that are not finite numbers are skipped before the size check.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(parse::parse_numbers(raw))
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the distinct observed values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use probstat_stats::sample::Sample;
    /// let mut values = vec![3.0; 18];
    /// values.extend([1.0, 2.0]);
    /// let sample = Sample::new(values).unwrap();
    /// assert_eq!(sample.sample_space(), vec![1.0, 2.0, 3.0]);
    /// ```
    #[must_use]
    pub fn sample_space(&self) -> Vec<f64> {
        let mut unique = self.values.clone();
        unique.sort_by(f64::total_cmp);
        unique.dedup_by(|a, b| a == b);
        unique
    }
}

/// Summary measures shown alongside a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSummary {
    /// The number of values.
    pub count: usize,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// The arithmetic mean.
    pub mean: f64,
    /// The median.
    pub median: f64,
    /// The most frequent value, if any value repeats.
    pub mode: Mode,
}

impl SampleSummary {
    /// Summarizes a validated sample.
    ///
    /// # Examples
    ///
    /// ```
    /// # use probstat_stats::sample::{Sample, SampleSummary};
    /// let mut values = (1..=19).map(f64::from).collect::<Vec<_>>();
    /// values.push(19.0);
    /// let summary = SampleSummary::new(&Sample::new(values).unwrap());
    /// assert_eq!(summary.count, 20);
    /// assert_eq!(summary.range, 18.0);
    /// assert_eq!(summary.median, 10.5);
    /// ```
    #[must_use]
    pub fn new(sample: &Sample) -> Self {
        let values = sample.values();
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        // A validated sample is never empty
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let mean = descriptive::mean(values).unwrap_or(f64::NAN);
        let median = descriptive::median_of_sorted(&sorted).unwrap_or(f64::NAN);

        Self {
            count: values.len(),
            min,
            max,
            range: max - min,
            mean,
            median,
            mode: descriptive::mode(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_values() -> Vec<f64> {
        crate::parse::parse_numbers(crate::DEMO_DATA)
    }

    #[test]
    fn test_too_small_reports_counts() {
        let err = Sample::parse("1 2 3 x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::SampleTooSmall {
                required: 20,
                actual: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "at least 20 valid numeric values are required (got 3)"
        );
    }

    #[test]
    fn test_exactly_minimum_is_valid() {
        let values = vec![0.5; MIN_SAMPLE_SIZE];
        assert!(Sample::new(values).is_ok());
    }

    #[test]
    fn test_demo_summary() {
        let sample = Sample::new(demo_values()).unwrap();
        let summary = SampleSummary::new(&sample);
        assert_eq!(summary.count, 29);
        assert_eq!(summary.min, 12.0);
        assert_eq!(summary.max, 65.0);
        assert_eq!(summary.range, 53.0);
        assert_eq!(summary.median, 39.0);
        // 15, 28, 37, 39, 44, 59, 65 all occur twice; 15 comes first
        assert_eq!(summary.mode, Mode::Value(15.0));
    }

    #[test]
    fn test_min_max_keep_input_order_untouched() {
        let sample = Sample::new(demo_values()).unwrap();
        assert_eq!(sample.min(), 12.0);
        assert_eq!(sample.max(), 65.0);
        assert_eq!(sample.values()[28], 28.0);
    }
}
