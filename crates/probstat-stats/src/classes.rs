//! Fixed-width class intervals and frequency tables.
//!
//! Classes start at the sample minimum and advance by repeated addition of the
//! class width until the maximum is covered. Every class is half-open
//! (`[a, b)`) except the last one, which also accepts its upper bound. A value
//! lying on an interior boundary therefore belongs to the class that starts
//! there.
//!
//! # Examples
//!
//! ```
//! use probstat_stats::classes::FrequencyTable;
//!
//! let data = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0];
//! let table = FrequencyTable::new(&data, 2.0).unwrap();
//!
//! // [1-3) [3-5) [5-7]
//! assert_eq!(table.classes.len(), 3);
//! assert_eq!(
//!     table.classes.iter().map(|c| c.fi).collect::<Vec<_>>(),
//!     vec![3, 2, 1]
//! );
//! assert_eq!(table.classes[2].cumulative_fi, 6);
//! ```

use std::ops::Range;

use serde::Serialize;

use crate::{error::ValidationError, format::format_value};

/// Upper limit on the number of classes a single table may contain.
pub const MAX_CLASSES: usize = 10_000;

/// An empty class boundary produced by [`build_classes`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBounds {
    /// Inclusive lower bound.
    pub start: f64,
    /// Upper bound; exclusive except for the last class.
    pub end: f64,
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassInterval {
    /// Display label such as `[12-20)`.
    pub label: String,
    /// Inclusive lower bound `a`.
    pub start: f64,
    /// Upper bound `b`; exclusive except for the last class.
    pub end: f64,
    /// Class midpoint `(a + b) / 2`.
    pub midpoint: f64,
    /// Absolute frequency.
    pub fi: u64,
    /// Relative frequency `fi / n`.
    pub fr: f64,
    /// Cumulative absolute frequency up to and including this class.
    pub cumulative_fi: u64,
    /// Cumulative relative frequency up to and including this class.
    pub cumulative_fr: f64,
}

impl ClassInterval {
    /// Returns the bounds as a range (inclusive start, exclusive end).
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        self.start..self.end
    }
}

/// A frequency table over fixed-width classes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    /// The class width used to build the table.
    pub width: f64,
    /// Number of values tallied.
    pub total: usize,
    /// The classes in ascending order.
    pub classes: Vec<ClassInterval>,
}

impl FrequencyTable {
    /// Builds classes for the data and tallies their frequencies.
    pub fn new(data: &[f64], width: f64) -> Result<Self, ValidationError> {
        let bounds = build_classes(data, width)?;
        let classes = fill_frequencies(data, &bounds);
        tracing::debug!(
            width,
            classes = classes.len(),
            values = data.len(),
            "built frequency table"
        );
        Ok(Self {
            width,
            total: data.len(),
            classes,
        })
    }

    /// Returns the largest absolute frequency, or 0 for an empty table.
    #[must_use]
    pub fn max_fi(&self) -> u64 {
        self.classes.iter().map(|c| c.fi).max().unwrap_or(0)
    }
}

/// Generates contiguous classes of fixed `width` starting at the data minimum.
///
/// Classes are pushed while their start is `<= max(data)`, so the last class
/// always contains the maximum.
///
/// # Errors
///
/// * [`ValidationError::EmptySample`] - if `data` is empty
/// * [`ValidationError::InvalidClassWidth`] - if `width` is not a finite number `> 0`
/// * [`ValidationError::ClassWidthTooSmall`] - if adding `width` does not move a boundary
/// * [`ValidationError::TooManyClasses`] - if more than [`MAX_CLASSES`] classes would be needed
///
/// # Examples
///
/// ```
/// # use probstat_stats::classes::build_classes;
/// let classes = build_classes(&[12.0, 65.0, 30.0], 8.0).unwrap();
/// assert_eq!(classes.len(), 7);
/// assert_eq!(classes[0].start, 12.0);
/// assert_eq!(classes[6].start, 60.0);
/// assert_eq!(classes[6].end, 68.0);
/// ```
pub fn build_classes(data: &[f64], width: f64) -> Result<Vec<ClassBounds>, ValidationError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ValidationError::InvalidClassWidth { width });
    }
    if data.is_empty() {
        return Err(ValidationError::EmptySample);
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut classes = vec![];
    let mut start = min;
    while start <= max {
        let end = start + width;
        if end <= start {
            return Err(ValidationError::ClassWidthTooSmall {
                width,
                boundary: start,
            });
        }
        if classes.len() == MAX_CLASSES {
            return Err(ValidationError::TooManyClasses {
                width,
                max: MAX_CLASSES,
            });
        }
        classes.push(ClassBounds { start, end });
        start = end;
    }
    Ok(classes)
}

/// Assigns each value to its class and accumulates cumulative frequencies.
///
/// A value `x` goes to the first class with `start <= x < end`; the last
/// class also accepts `x == end`. Values outside every class are ignored.
///
/// # Examples
///
/// ```
/// # use probstat_stats::classes::{build_classes, fill_frequencies};
/// let data = [0.0, 10.0, 10.0, 20.0];
/// let bounds = build_classes(&data, 10.0).unwrap();
/// let table = fill_frequencies(&data, &bounds);
/// // 10 sits on the boundary and belongs to [10-20)
/// assert_eq!(table[0].fi, 1);
/// assert_eq!(table[1].fi, 2);
/// assert_eq!(table[2].fi, 1);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn fill_frequencies(data: &[f64], bounds: &[ClassBounds]) -> Vec<ClassInterval> {
    let mut counts = vec![0_u64; bounds.len()];
    for &x in data {
        let idx = bounds.iter().enumerate().position(|(i, c)| {
            let is_last = i == bounds.len() - 1;
            x >= c.start && (x < c.end || (is_last && x <= c.end))
        });
        if let Some(idx) = idx {
            counts[idx] += 1;
        }
    }

    let n = data.len() as f64;
    let mut cumulative_fi = 0;
    let mut cumulative_fr = 0.0;
    bounds
        .iter()
        .zip(counts)
        .map(|(c, fi)| {
            let fr = fi as f64 / n;
            cumulative_fi += fi;
            cumulative_fr += fr;
            ClassInterval {
                label: format!("[{}-{})", format_value(c.start), format_value(c.end)),
                start: c.start,
                end: c.end,
                midpoint: f64::midpoint(c.start, c.end),
                fi,
                fr,
                cumulative_fi,
                cumulative_fr,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_numbers;

    #[test]
    fn test_demo_table() {
        let data = parse_numbers(crate::DEMO_DATA);
        let table = FrequencyTable::new(&data, 8.0).unwrap();

        let starts = table.classes.iter().map(|c| c.start).collect::<Vec<_>>();
        assert_eq!(starts, vec![12.0, 20.0, 28.0, 36.0, 44.0, 52.0, 60.0]);
        assert!(table.classes.last().unwrap().end >= 65.0);

        let fi = table.classes.iter().map(|c| c.fi).collect::<Vec<_>>();
        // [12,20): 12 13 15 15 17
        // [20,28): 21 24
        // [28,36): 28 28 32 35
        // [36,44): 36 37 37 39 39 40 41
        // [44,52): 44 44 51
        // [52,60): 54 56 59 59
        // [60,68]: 62 64 65 65
        assert_eq!(fi, vec![5, 2, 4, 7, 3, 4, 4]);
        assert_eq!(table.classes.last().unwrap().cumulative_fi, 29);
        assert_eq!(table.max_fi(), 7);
        assert_eq!(table.classes[0].label, "[12-20)");
        assert_eq!(table.classes[0].midpoint, 16.0);
    }

    #[test]
    fn test_last_class_includes_upper_bound() {
        // max lands exactly on the end of the last class only if start == max,
        // so construct bounds by hand
        let bounds = vec![
            ClassBounds {
                start: 0.0,
                end: 5.0,
            },
            ClassBounds {
                start: 5.0,
                end: 10.0,
            },
        ];
        let table = fill_frequencies(&[0.0, 5.0, 10.0], &bounds);
        assert_eq!(table[0].fi, 1);
        assert_eq!(table[1].fi, 2);
    }

    #[test]
    fn test_interior_upper_bound_is_excluded() {
        let bounds = vec![
            ClassBounds {
                start: 0.0,
                end: 5.0,
            },
            ClassBounds {
                start: 5.0,
                end: 10.0,
            },
        ];
        let table = fill_frequencies(&[5.0], &bounds);
        assert_eq!(table[0].fi, 0);
        assert_eq!(table[1].fi, 1);
    }

    #[test]
    fn test_cumulative_relative_ends_at_one() {
        let data = parse_numbers("1.5 2.25 3 3 7.75 9 10.5 11");
        let table = FrequencyTable::new(&data, 2.5).unwrap();
        let last = table.classes.last().unwrap();
        assert!((last.cumulative_fr - 1.0).abs() < 1e-9);
        assert_eq!(last.cumulative_fi, 8);
    }

    #[test]
    fn test_single_distinct_value() {
        let table = FrequencyTable::new(&[4.0, 4.0, 4.0], 1.0).unwrap();
        assert_eq!(table.classes.len(), 1);
        assert_eq!(table.classes[0].fi, 3);
        assert_eq!(table.classes[0].range(), 4.0..5.0);
    }

    #[test]
    fn test_invalid_widths() {
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                build_classes(&[1.0, 2.0], width),
                Err(ValidationError::InvalidClassWidth { .. })
            ));
        }
    }

    #[test]
    fn test_empty_data() {
        assert_eq!(build_classes(&[], 1.0), Err(ValidationError::EmptySample));
    }

    #[test]
    fn test_width_too_small_to_advance() {
        let result = build_classes(&[1e20, 2e20], 1.0);
        assert!(matches!(
            result,
            Err(ValidationError::ClassWidthTooSmall { .. })
        ));
    }

    #[test]
    fn test_too_many_classes() {
        let result = build_classes(&[0.0, 1_000_000.0], 1.0);
        assert_eq!(
            result,
            Err(ValidationError::TooManyClasses {
                width: 1.0,
                max: MAX_CLASSES
            })
        );
    }
}
