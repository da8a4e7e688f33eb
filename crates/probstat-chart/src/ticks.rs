//! "Nice" axis ticks.
//!
//! The step size is rounded up at the leading digit of the raw step
//! (`max / tick_count`), so axes show values such as `0, 8, 16, 24, 32, 40`
//! rather than `0, 7.4, 14.8, …`.

use serde::Serialize;

/// Tick values for an axis starting at zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NiceTicks {
    /// Upper bound of the axis; a multiple of `step` and `>= max(1, max_value)`.
    pub top: f64,
    /// Distance between consecutive ticks.
    pub step: f64,
    /// `0, step, 2·step, …, top`.
    pub values: Vec<f64>,
}

/// Computes ticks from zero up to a rounded bound covering `max_value`.
///
/// The maximum is clamped to at least 1. With `raw = max / tick_count` and
/// `p = 10^floor(log10(raw))`, the step is `ceil(raw / p) · p` and the top is
/// the smallest multiple of the step that is `>= max`.
///
/// # Examples
///
/// ```
/// use probstat_chart::ticks::nice_ticks;
///
/// let ticks = nice_ticks(37.0, 5);
/// assert_eq!(ticks.step, 8.0);
/// assert_eq!(ticks.top, 40.0);
/// assert_eq!(ticks.values, vec![0.0, 8.0, 16.0, 24.0, 32.0, 40.0]);
///
/// let ticks = nice_ticks(120.0, 5);
/// assert_eq!(ticks.step, 30.0);
/// assert_eq!(ticks.top, 120.0);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn nice_ticks(max_value: f64, tick_count: usize) -> NiceTicks {
    let max = f64::max(1.0, max_value);
    let raw_step = max / tick_count.max(1) as f64;
    let pow10 = 10_f64.powf(raw_step.log10().floor());
    let step = (raw_step / pow10).ceil() * pow10;
    let top = (max / step).ceil() * step;

    // Multiply instead of accumulating to keep tick values free of drift
    let count = (top / step).round() as usize;
    let values = (0..=count).map(|i| i as f64 * step).collect();

    NiceTicks { top, step, values }
}
