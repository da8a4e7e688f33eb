//! All statistics of one sample, bundled into a single report.

use serde::Serialize;

use crate::{
    classes::FrequencyTable,
    error::ValidationError,
    pareto::ParetoSeries,
    sample::{Sample, SampleSummary},
    stem_leaf::StemLeaf,
};

/// Everything computed from one sample and class width.
///
/// This structure combines:
/// - Summary measures (count, range, mean, median, mode)
/// - A fixed-width frequency table
/// - A Pareto ranking of the observed values
/// - A stem-and-leaf plot
/// - The sample space (distinct observed values)
///
/// # Examples
///
/// ```
/// use probstat_stats::{DEMO_DATA, report::DataReport};
///
/// let report = DataReport::parse(DEMO_DATA, 8.0).unwrap();
/// assert_eq!(report.summary.count, 29);
/// assert_eq!(report.table.classes.len(), 7);
/// assert_eq!(report.table.classes.last().unwrap().cumulative_fi, 29);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataReport {
    pub sample: Sample,
    pub summary: SampleSummary,
    pub table: FrequencyTable,
    pub pareto: ParetoSeries,
    pub stem_leaf: StemLeaf,
    pub sample_space: Vec<f64>,
}

impl DataReport {
    /// Builds the report for a validated sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the class width is not a finite number `> 0` or
    /// produces an unusable set of classes.
    pub fn new(sample: Sample, width: f64) -> Result<Self, ValidationError> {
        let table = FrequencyTable::new(sample.values(), width)?;
        let summary = SampleSummary::new(&sample);
        let pareto = ParetoSeries::from_values(sample.values());
        let stem_leaf = StemLeaf::new(sample.values());
        let sample_space = sample.sample_space();
        tracing::debug!(
            count = summary.count,
            classes = table.classes.len(),
            distinct = sample_space.len(),
            "built data report"
        );
        Ok(Self {
            sample,
            summary,
            table,
            pareto,
            stem_leaf,
            sample_space,
        })
    }

    /// Parses free text, validates the sample size and builds the report.
    pub fn parse(raw: &str, width: f64) -> Result<Self, ValidationError> {
        Self::new(Sample::parse(raw)?, width)
    }
}
