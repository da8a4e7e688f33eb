//! Pareto chart layout: ranked bars with a cumulative percentage line.

use probstat_stats::pareto::ParetoSeries;

use crate::{
    frequency::{MAX_X_TICKS, value_axis},
    geometry::{Axis, Bar, ChartGeometry, ChartKind, Point, Tick, bar_slot},
    layout::{CanvasSize, Padding, PlotRect},
};

/// Distance between labels on the percentage axis.
pub const PERCENT_STEP: usize = 20;

/// Lays out a Pareto chart.
///
/// Bars follow the order of the series (descending counts) and are scaled
/// against the left axis. The cumulative percentage line has one vertex at
/// the centre of each bar and uses the right axis, which always spans
/// 0–100 %.
///
/// # Examples
///
/// ```
/// use probstat_chart::{layout::CanvasSize, pareto::pareto};
/// use probstat_stats::pareto::ParetoSeries;
///
/// let series = ParetoSeries::from_values(&[1.0, 2.0, 2.0, 3.0, 2.0]);
/// let chart = pareto(&series, CanvasSize::default());
/// assert_eq!(chart.bars.len(), 3);
/// assert_eq!(chart.bars[0].label, "2");
/// assert_eq!(chart.line.last().unwrap().y, chart.plot.top);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pareto(series: &ParetoSeries, canvas: CanvasSize) -> ChartGeometry {
    let plot = PlotRect::new(canvas, Padding::DUAL_AXIS);
    let (y_axis, top) = value_axis(&plot, series.max_count() as f64, "fi");
    let count_scale = plot.y_scale(0.0, top);
    let percent_scale = plot.y_scale(0.0, 100.0);

    let slot_width = plot.width() / series.len().max(1) as f64;
    let label_every = series.len().div_ceil(MAX_X_TICKS).max(1);

    let mut bars = Vec::with_capacity(series.len());
    let mut line = Vec::with_capacity(series.len());
    let mut x_ticks = vec![];
    for (i, (entry, &percent)) in series
        .entries
        .iter()
        .zip(&series.cumulative_percent)
        .enumerate()
    {
        let (x, width) = bar_slot(plot.left, i, slot_width);
        let value = entry.count as f64;
        let y = count_scale.map(value);
        bars.push(Bar {
            x,
            y,
            width,
            height: plot.bottom - y,
            label: entry.label.clone(),
            value,
        });

        let center = plot.left + (i as f64 + 0.5) * slot_width;
        line.push(Point {
            x: center,
            y: percent_scale.map(percent),
        });
        if i % label_every == 0 {
            x_ticks.push(Tick {
                value: i as f64,
                position: center,
                label: entry.label.clone(),
            });
        }
    }

    let percent_ticks = (0..=100_u32)
        .step_by(PERCENT_STEP)
        .map(|p| {
            let value = f64::from(p);
            Tick {
                value,
                position: percent_scale.map(value),
                label: format!("{p}%"),
            }
        })
        .collect();

    ChartGeometry {
        kind: ChartKind::Pareto,
        canvas,
        plot,
        x_axis: Axis {
            title: "X".to_string(),
            ticks: x_ticks,
        },
        y_axis,
        secondary_y_axis: Some(Axis {
            title: "% cum.".to_string(),
            ticks: percent_ticks,
        }),
        bars,
        line,
    }
}

#[cfg(test)]
mod tests {
    use probstat_stats::{DEMO_DATA, parse::parse_numbers};

    use super::*;

    fn demo_chart() -> ChartGeometry {
        let series = ParetoSeries::from_values(&parse_numbers(DEMO_DATA));
        pareto(&series, CanvasSize::default())
    }

    #[test]
    fn test_demo_layout() {
        let chart = demo_chart();
        assert_eq!(chart.plot.left, 60.0);
        assert_eq!(chart.plot.right, 840.0);
        assert_eq!(chart.plot.top, 16.0);
        assert_eq!(chart.plot.bottom, 250.0);
        assert_eq!(chart.bars.len(), 22);
        assert_eq!(chart.line.len(), 22);

        // 22 entries, one label every 4 bars
        let labels = chart
            .x_axis
            .ticks
            .iter()
            .map(|t| t.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "15");
    }

    #[test]
    fn test_bars_descend_and_line_rises() {
        let chart = demo_chart();
        assert!(chart.bars.windows(2).all(|w| w[0].height >= w[1].height));
        // Canvas y grows downwards
        assert!(chart.line.windows(2).all(|w| w[0].y > w[1].y));
        assert!((chart.line.last().unwrap().y - chart.plot.top).abs() < 1e-9);
    }

    #[test]
    fn test_line_vertices_at_bar_centres() {
        let chart = demo_chart();
        for (bar, point) in chart.bars.iter().zip(&chart.line) {
            assert!((bar.x + bar.width / 2.0 - point.x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_percent_axis() {
        let chart = demo_chart();
        let axis = chart.secondary_y_axis.unwrap();
        let labels = axis.ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["0%", "20%", "40%", "60%", "80%", "100%"]);
        assert_eq!(axis.ticks[0].position, chart.plot.bottom);
        assert_eq!(axis.ticks[5].position, chart.plot.top);
    }

    #[test]
    fn test_left_axis_uses_nice_ticks() {
        // Highest count in the demo data is 2
        let chart = demo_chart();
        let top = crate::ticks::nice_ticks(2.0, 5).top;
        assert!((chart.y_axis.ticks.last().unwrap().value - top).abs() < 1e-9);
        let expected = chart.plot.height() * 2.0 / top;
        assert!((chart.bars[0].height - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_series() {
        let chart = pareto(&ParetoSeries::new(vec![]), CanvasSize::default());
        assert!(chart.is_empty());
        assert!(chart.x_axis.ticks.is_empty());
    }
}
