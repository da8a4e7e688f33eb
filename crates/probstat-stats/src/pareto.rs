//! Pareto ranking of observed values.

use serde::Serialize;

/// A label and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: u64,
}

/// Labeled counts sorted by descending count, with cumulative percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoSeries {
    /// Entries sorted by descending count; ties keep first-appearance order.
    pub entries: Vec<LabeledCount>,
    /// Cumulative percentage (0–100) up to and including each entry.
    pub cumulative_percent: Vec<f64>,
    /// Sum of all counts.
    pub total: u64,
}

impl ParetoSeries {
    /// Ranks arbitrary labeled counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstat_stats::pareto::{LabeledCount, ParetoSeries};
    ///
    /// let series = ParetoSeries::new(vec![
    ///     LabeledCount { label: "b".into(), count: 1 },
    ///     LabeledCount { label: "a".into(), count: 3 },
    /// ]);
    /// assert_eq!(series.entries[0].label, "a");
    /// assert_eq!(series.cumulative_percent, vec![75.0, 100.0]);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(mut entries: Vec<LabeledCount>) -> Self {
        // Stable sort keeps first-appearance order for ties
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        let total = entries.iter().map(|e| e.count).sum::<u64>();
        let denominator = if total == 0 { 1.0 } else { total as f64 };
        let mut cumulative = 0;
        let cumulative_percent = entries
            .iter()
            .map(|e| {
                cumulative += e.count;
                100.0 * cumulative as f64 / denominator
            })
            .collect();

        Self {
            entries,
            cumulative_percent,
            total,
        }
    }

    /// Counts each distinct value of the data.
    ///
    /// Values are grouped by exact equality, so values that differ only by
    /// floating-point noise stay separate entries. Each label is the shortest
    /// string that reads back as the same value.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstat_stats::pareto::ParetoSeries;
    ///
    /// let series = ParetoSeries::from_values(&[2.0, 1.5, 2.0, 3.0, 1.5, 2.0]);
    /// let labels = series.entries.iter().map(|e| e.label.as_str()).collect::<Vec<_>>();
    /// assert_eq!(labels, ["2", "1.5", "3"]);
    /// assert_eq!(series.total, 6);
    /// ```
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let mut counts: Vec<(f64, u64)> = vec![];
        for &x in values {
            match counts.iter_mut().find(|(value, _)| *value == x) {
                Some((_, count)) => *count += 1,
                None => counts.push((x, 1)),
            }
        }
        let entries = counts
            .into_iter()
            .map(|(value, count)| LabeledCount {
                label: exact_label(value),
                count,
            })
            .collect();
        Self::new(entries)
    }

    /// Returns the largest count, or 0 for an empty series.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.entries.first().map_or(0, |e| e.count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Formats a value without rounding; `-0` prints as `0`.
fn exact_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
