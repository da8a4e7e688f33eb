//! Canvas sizes, plot rectangles and linear scales.
//!
//! All coordinates are in canvas pixels with the origin at the top-left
//! corner and `y` growing downwards.

use serde::Serialize;

/// Width and height of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 300.0,
        }
    }
}

/// Space reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    /// Padding for single-axis charts (histogram, polygon, ogive).
    pub const SINGLE_AXIS: Self = Self {
        left: 50.0,
        top: 12.0,
        right: 12.0,
        bottom: 50.0,
    };

    /// Padding for charts with a secondary axis on the right (Pareto).
    pub const DUAL_AXIS: Self = Self {
        left: 60.0,
        top: 16.0,
        right: 60.0,
        bottom: 50.0,
    };
}

/// The area inside the axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    /// Insets the canvas by the padding.
    ///
    /// A canvas too small for the padding yields a zero-sized rectangle
    /// anchored at the top-left corner of the plot area.
    #[must_use]
    pub fn new(canvas: CanvasSize, padding: Padding) -> Self {
        let right = f64::max(padding.left, canvas.width - padding.right);
        let bottom = f64::max(padding.top, canvas.height - padding.bottom);
        Self {
            left: padding.left,
            top: padding.top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal scale mapping `[min, max]` onto the plot width.
    #[must_use]
    pub fn x_scale(&self, min: f64, max: f64) -> LinearScale {
        LinearScale::new((min, max), (self.left, self.right))
    }

    /// Vertical scale mapping `[min, max]` onto the plot height, bottom up.
    #[must_use]
    pub fn y_scale(&self, min: f64, max: f64) -> LinearScale {
        LinearScale::new((min, max), (self.bottom, self.top))
    }
}

/// Affine map from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a scale. An empty domain is widened to a span of 1.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if domain.1 - domain.0 == 0.0 {
            (domain.0, domain.0 + 1.0)
        } else {
            domain
        };
        Self { domain, range }
    }

    /// Maps a data value to a pixel coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstat_chart::layout::LinearScale;
    ///
    /// let scale = LinearScale::new((0.0, 40.0), (250.0, 12.0));
    /// assert_eq!(scale.map(0.0), 250.0);
    /// assert_eq!(scale.map(40.0), 12.0);
    /// assert_eq!(scale.map(20.0), 131.0);
    /// ```
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_rect() {
        let plot = PlotRect::new(CanvasSize::default(), Padding::SINGLE_AXIS);
        assert_eq!(plot.left, 50.0);
        assert_eq!(plot.top, 12.0);
        assert_eq!(plot.right, 888.0);
        assert_eq!(plot.bottom, 250.0);
        assert_eq!(plot.width(), 838.0);
        assert_eq!(plot.height(), 238.0);
    }

    #[test]
    fn test_tiny_canvas_does_not_invert() {
        let canvas = CanvasSize {
            width: 40.0,
            height: 20.0,
        };
        let plot = PlotRect::new(canvas, Padding::DUAL_AXIS);
        assert_eq!(plot.width(), 0.0);
        assert_eq!(plot.height(), 0.0);
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.map(5.0), 0.0);
        assert_eq!(scale.map(6.0), 100.0);
    }

    #[test]
    fn test_y_scale_grows_upwards() {
        let plot = PlotRect::new(CanvasSize::default(), Padding::SINGLE_AXIS);
        let y = plot.y_scale(0.0, 10.0);
        assert!(y.map(10.0) < y.map(0.0));
        assert_eq!(y.map(0.0), plot.bottom);
        assert_eq!(y.map(10.0), plot.top);
    }
}
