//! Chart geometry for frequency tables and Pareto series.
//!
//! This crate turns statistics into pixel coordinates. It does not draw: every
//! layout function returns a [`ChartGeometry`] that a renderer (a terminal
//! canvas, an SVG writer, a JSON consumer) can stroke and fill directly.
//!
//! - [`ticks`]: "Nice" axis tick values
//! - [`layout`]: Canvas sizes, plot rectangles and linear scales
//! - [`geometry`]: Bars, points, ticks and axes
//! - [`frequency`]: Histogram, frequency polygon and ogive
//! - [`pareto`]: Pareto chart
//!
//! # Examples
//!
//! ```
//! use probstat_chart::{ChartKind, build_chart, layout::CanvasSize};
//! use probstat_stats::{DEMO_DATA, report::DataReport};
//!
//! let report = DataReport::parse(DEMO_DATA, 8.0).unwrap();
//! let chart = build_chart(ChartKind::Histogram, &report, CanvasSize::default());
//! assert_eq!(chart.bars.len(), 7);
//! ```

use probstat_stats::report::DataReport;

pub use self::geometry::{ChartGeometry, ChartKind};
use self::layout::CanvasSize;

pub mod frequency;
pub mod geometry;
pub mod layout;
pub mod pareto;
pub mod ticks;

/// Builds the chart of the given kind for a data report.
#[must_use]
pub fn build_chart(kind: ChartKind, report: &DataReport, canvas: CanvasSize) -> ChartGeometry {
    let chart = match kind {
        ChartKind::Histogram => frequency::histogram(&report.table, canvas),
        ChartKind::FrequencyPolygon => frequency::frequency_polygon(&report.table, canvas),
        ChartKind::Ogive => frequency::ogive(&report.table, canvas),
        ChartKind::Pareto => pareto::pareto(&report.pareto, canvas),
    };
    tracing::debug!(
        %kind,
        bars = chart.bars.len(),
        points = chart.line.len(),
        "laid out chart"
    );
    chart
}
