//! Histogram, frequency polygon and ogive layouts.

use probstat_stats::{
    classes::FrequencyTable,
    format::{format_value, round2},
};

use crate::{
    geometry::{Axis, Bar, ChartGeometry, ChartKind, Point, Tick, bar_slot},
    layout::{CanvasSize, Padding, PlotRect},
    ticks::nice_ticks,
};

/// Number of ticks requested on the frequency axis.
pub const Y_TICK_COUNT: usize = 5;

/// Maximum number of labels on the horizontal axis of a line chart.
pub const MAX_X_TICKS: usize = 6;

/// Builds the frequency axis and returns it with its top value.
pub(crate) fn value_axis(plot: &PlotRect, max_value: f64, title: &str) -> (Axis, f64) {
    let ticks = nice_ticks(max_value, Y_TICK_COUNT);
    let scale = plot.y_scale(0.0, ticks.top);
    let axis = Axis {
        title: title.to_string(),
        ticks: ticks
            .values
            .iter()
            .map(|&value| Tick {
                value,
                position: scale.map(value),
                label: format_value(value),
            })
            .collect(),
    };
    (axis, ticks.top)
}

/// Lays out one bar per class, with heights proportional to `fi`.
///
/// # Examples
///
/// ```
/// use probstat_chart::{frequency::histogram, layout::CanvasSize};
/// use probstat_stats::classes::FrequencyTable;
///
/// let table = FrequencyTable::new(&[1.0, 2.0, 2.0, 7.0], 5.0).unwrap();
/// let chart = histogram(&table, CanvasSize::default());
/// assert_eq!(chart.bars.len(), 2);
/// assert_eq!(chart.bars[0].label, "1-6");
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn histogram(table: &FrequencyTable, canvas: CanvasSize) -> ChartGeometry {
    let plot = PlotRect::new(canvas, Padding::SINGLE_AXIS);
    let (y_axis, top) = value_axis(&plot, table.max_fi() as f64, "fi");
    let y = plot.y_scale(0.0, top);

    let slot_width = plot.width() / table.classes.len().max(1) as f64;
    let mut bars = Vec::with_capacity(table.classes.len());
    let mut x_ticks = Vec::with_capacity(table.classes.len());
    for (i, class) in table.classes.iter().enumerate() {
        let (x, width) = bar_slot(plot.left, i, slot_width);
        let fi = class.fi as f64;
        let label = format!("{}-{}", format_value(class.start), format_value(class.end));
        bars.push(Bar {
            x,
            y: y.map(fi),
            width,
            height: plot.bottom - y.map(fi),
            label: label.clone(),
            value: fi,
        });
        x_ticks.push(Tick {
            value: class.midpoint,
            position: x + width / 2.0,
            label,
        });
    }

    ChartGeometry {
        kind: ChartKind::Histogram,
        canvas,
        plot,
        x_axis: Axis {
            title: "X".to_string(),
            ticks: x_ticks,
        },
        y_axis,
        secondary_y_axis: None,
        bars,
        line: vec![],
    }
}

/// Frequency polygon: `fi` against class midpoints.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn frequency_polygon(table: &FrequencyTable, canvas: CanvasSize) -> ChartGeometry {
    let xs = table.classes.iter().map(|c| c.midpoint).collect::<Vec<_>>();
    let ys = table.classes.iter().map(|c| c.fi as f64).collect::<Vec<_>>();
    ChartGeometry {
        kind: ChartKind::FrequencyPolygon,
        ..line_chart(&xs, &ys, "fi", canvas)
    }
}

/// Ogive: cumulative `Fi` against class upper bounds.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ogive(table: &FrequencyTable, canvas: CanvasSize) -> ChartGeometry {
    let xs = table.classes.iter().map(|c| c.end).collect::<Vec<_>>();
    let ys = table
        .classes
        .iter()
        .map(|c| c.cumulative_fi as f64)
        .collect::<Vec<_>>();
    ChartGeometry {
        kind: ChartKind::Ogive,
        ..line_chart(&xs, &ys, "Fi", canvas)
    }
}

/// Lays out a polyline through `(xs[i], ys[i])`.
///
/// The horizontal axis spans `[min(xs), max(xs)]` and the vertical axis
/// starts at zero. Pairs beyond the shorter of the two slices are ignored.
/// At most [`MAX_X_TICKS`] evenly picked x values are labelled, always
/// including the first and the last.
#[must_use]
pub fn line_chart(xs: &[f64], ys: &[f64], y_title: &str, canvas: CanvasSize) -> ChartGeometry {
    let len = usize::min(xs.len(), ys.len());
    let (xs, ys) = (&xs[..len], &ys[..len]);

    let plot = PlotRect::new(canvas, Padding::SINGLE_AXIS);
    let max_y = ys.iter().copied().fold(1.0, f64::max);
    let (y_axis, top) = value_axis(&plot, max_y, y_title);
    let y = plot.y_scale(0.0, top);

    let (min_x, max_x) = xs
        .iter()
        .fold(None, |acc: Option<(f64, f64)>, &v| {
            Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
        })
        .unwrap_or((0.0, 1.0));
    let x = plot.x_scale(min_x, max_x);

    let x_ticks = x_tick_values(xs)
        .into_iter()
        .map(|value| Tick {
            value,
            position: x.map(value),
            label: format_value(round2(value)),
        })
        .collect();
    let line = xs
        .iter()
        .zip(ys)
        .map(|(&xv, &yv)| Point {
            x: x.map(xv),
            y: y.map(yv),
        })
        .collect();

    ChartGeometry {
        kind: ChartKind::FrequencyPolygon,
        canvas,
        plot,
        x_axis: Axis {
            title: "X".to_string(),
            ticks: x_ticks,
        },
        y_axis,
        secondary_y_axis: None,
        bars: vec![],
        line,
    }
}

/// Picks the x values that get a label: every `step`-th value from the first,
/// with `step = ceil((len - 1) / (MAX_X_TICKS - 1))`, and the last value if
/// it is not already among them. Never more than [`MAX_X_TICKS`] values.
fn x_tick_values(xs: &[f64]) -> Vec<f64> {
    let Some(&last) = xs.last() else {
        return vec![];
    };
    let last_index = xs.len() - 1;
    let step = last_index.div_ceil(MAX_X_TICKS - 1).max(1);
    let mut values = xs.iter().copied().step_by(step).collect::<Vec<_>>();
    if last_index % step != 0 {
        values.push(last);
    }
    values
}

#[cfg(test)]
mod tests {
    use probstat_stats::{DEMO_DATA, parse::parse_numbers};

    use super::*;

    fn demo_table() -> FrequencyTable {
        FrequencyTable::new(&parse_numbers(DEMO_DATA), 8.0).unwrap()
    }

    #[test]
    fn test_histogram_demo() {
        let chart = histogram(&demo_table(), CanvasSize::default());
        assert_eq!(chart.kind, ChartKind::Histogram);
        assert_eq!(chart.bars.len(), 7);

        // max fi is 7, so the axis tops out at 8 with a step of 2
        let labels = chart
            .y_axis
            .ticks
            .iter()
            .map(|t| t.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["0", "2", "4", "6", "8"]);
        assert_eq!(chart.y_axis.ticks[0].position, chart.plot.bottom);
        assert_eq!(chart.y_axis.ticks[4].position, chart.plot.top);

        let tallest = &chart.bars[3];
        assert_eq!(tallest.value, 7.0);
        assert!((tallest.height - chart.plot.height() * 7.0 / 8.0).abs() < 1e-9);
        assert!((tallest.y + tallest.height - chart.plot.bottom).abs() < 1e-9);
        assert_eq!(chart.bars[0].label, "12-20");
    }

    #[test]
    fn test_histogram_bars_stay_inside_plot() {
        let chart = histogram(&demo_table(), CanvasSize::default());
        for pair in chart.bars.windows(2) {
            assert!(pair[0].x + pair[0].width < pair[1].x);
        }
        let last = chart.bars.last().unwrap();
        assert!(last.x + last.width <= chart.plot.right);
        assert!(chart.bars[0].x >= chart.plot.left);
    }

    #[test]
    fn test_polygon_uses_midpoints() {
        let table = demo_table();
        let chart = frequency_polygon(&table, CanvasSize::default());
        assert_eq!(chart.kind, ChartKind::FrequencyPolygon);
        assert_eq!(chart.line.len(), table.classes.len());
        assert_eq!(chart.line[0].x, chart.plot.left);
        assert_eq!(chart.line.last().unwrap().x, chart.plot.right);
        assert_eq!(chart.x_axis.ticks[0].label, "16");
    }

    #[test]
    fn test_ogive_reaches_total() {
        let chart = ogive(&demo_table(), CanvasSize::default());
        assert_eq!(chart.kind, ChartKind::Ogive);
        assert_eq!(chart.y_axis.title, "Fi");
        // Fi ends at 29; nice ticks for 29 top out at 30
        assert_eq!(chart.y_axis.ticks.last().unwrap().label, "30");
        let last = chart.line.last().unwrap();
        let expected = chart.plot.bottom - chart.plot.height() * 29.0 / 30.0;
        assert!((last.y - expected).abs() < 1e-9);
    }

    #[test]
    fn test_x_ticks_subsampled_with_last() {
        let xs = (0..20).map(f64::from).collect::<Vec<_>>();
        // ceil(19 / 5) = 4
        assert_eq!(
            x_tick_values(&xs),
            [0.0, 4.0, 8.0, 12.0, 16.0, 19.0]
        );

        let xs = [1.0, 2.0, 3.0];
        assert_eq!(x_tick_values(&xs), [1.0, 2.0, 3.0]);
        assert!(x_tick_values(&[]).is_empty());
    }

    #[test]
    fn test_x_ticks_never_exceed_limit() {
        for len in 1..=30 {
            let xs = (0..len).map(f64::from).collect::<Vec<_>>();
            let ticks = x_tick_values(&xs);
            assert!(ticks.len() <= MAX_X_TICKS, "{len} values: {ticks:?}");
            assert_eq!(ticks.first(), xs.first(), "{len} values");
            assert_eq!(ticks.last(), xs.last(), "{len} values");
            assert!(ticks.windows(2).all(|w| w[0] < w[1]), "{len} values");
        }

        let xs = (0..7).map(f64::from).collect::<Vec<_>>();
        assert_eq!(x_tick_values(&xs), [0.0, 2.0, 4.0, 6.0]);
        let xs = (0..13).map(f64::from).collect::<Vec<_>>();
        assert_eq!(x_tick_values(&xs), [0.0, 3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn test_single_point_line() {
        let chart = line_chart(&[5.0], &[3.0], "fi", CanvasSize::default());
        assert_eq!(chart.line.len(), 1);
        assert_eq!(chart.line[0].x, chart.plot.left);
        assert_eq!(chart.x_axis.ticks.len(), 1);
    }

    #[test]
    fn test_empty_line_chart() {
        let chart = line_chart(&[], &[], "fi", CanvasSize::default());
        assert!(chart.is_empty());
        assert!(chart.x_axis.ticks.is_empty());
        assert_eq!(chart.y_axis.ticks.last().unwrap().label, "1");
    }
}
