//! Renderer-independent chart geometry.
//!
//! A [`ChartGeometry`] holds everything needed to draw a chart: the plot
//! rectangle, axis ticks with their pixel positions, bars and polyline
//! vertices. Renderers only have to stroke and fill.

use serde::Serialize;

use crate::layout::{CanvasSize, PlotRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    #[display("Histogram")]
    Histogram,
    #[display("Frequency polygon")]
    FrequencyPolygon,
    #[display("Ogive")]
    Ogive,
    #[display("Pareto chart")]
    Pareto,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [
        Self::Histogram,
        Self::FrequencyPolygon,
        Self::Ogive,
        Self::Pareto,
    ];
}

/// An axis label at a pixel position.
///
/// `position` is an `x` coordinate for horizontal axes and a `y` coordinate
/// for vertical axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub ticks: Vec<Tick>,
}

/// A filled rectangle; `(x, y)` is its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub kind: ChartKind,
    pub canvas: CanvasSize,
    pub plot: PlotRect,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Percentage axis on the right side (Pareto only).
    pub secondary_y_axis: Option<Axis>,
    pub bars: Vec<Bar>,
    /// Polyline vertices in drawing order.
    pub line: Vec<Point>,
}

impl ChartGeometry {
    /// Returns `true` if the chart has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.line.is_empty()
    }
}

/// Horizontal inset on each side of a bar inside its slot.
pub const BAR_INSET: f64 = 6.0;

/// Returns `(x, width)` of the bar drawn in slot `index` of width `slot_width`.
///
/// Wide slots lose [`BAR_INSET`] on each side; narrow slots keep half of
/// their width so that bars never collapse or overlap.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn bar_slot(left: f64, index: usize, slot_width: f64) -> (f64, f64) {
    let inset = f64::min(BAR_INSET, slot_width / 4.0);
    let x = left + index as f64 * slot_width + inset;
    (x, slot_width - 2.0 * inset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_slot() {
        assert_eq!(bar_slot(50.0, 0, 100.0), (56.0, 88.0));
        assert_eq!(bar_slot(50.0, 2, 100.0), (256.0, 88.0));
    }

    #[test]
    fn test_narrow_slot_keeps_half() {
        let (x, width) = bar_slot(0.0, 1, 8.0);
        assert_eq!(x, 10.0);
        assert_eq!(width, 4.0);
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&ChartKind::FrequencyPolygon).unwrap();
        assert_eq!(json, "\"frequency-polygon\"");
        assert_eq!(ChartKind::Pareto.to_string(), "Pareto chart");
    }
}
