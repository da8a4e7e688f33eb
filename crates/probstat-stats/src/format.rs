//! Number formatting for table and axis labels.

/// Formats a value the way a person would write it on an axis or table.
///
/// Integral values print without a fractional part and floating-point noise
/// from repeated additions (`0.30000000000000004`) is rounded away at ten
/// decimal places.
///
/// # Examples
///
/// ```
/// use probstat_stats::format::format_value;
///
/// assert_eq!(format_value(28.0), "28");
/// assert_eq!(format_value(1.5), "1.5");
/// assert_eq!(format_value(0.1 + 0.2), "0.3");
/// assert_eq!(format_value(-0.0), "0");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    const SCALE: f64 = 1e10;
    // Beyond this magnitude the scaled value no longer has sub-unit precision
    const SCALE_LIMIT: f64 = 1e5;
    let rounded = if value.abs() < SCALE_LIMIT {
        (value * SCALE).round() / SCALE
    } else {
        value
    };
    if rounded == 0.0 {
        // Avoid printing "-0"
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Rounds a value to two decimal places for display.
///
/// # Examples
///
/// ```
/// use probstat_stats::format::round2;
///
/// assert_eq!(round2(37.456), 37.46);
/// assert_eq!(round2(12.0), 12.0);
/// ```
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_values_keep_precision() {
        assert_eq!(format_value(123_456.0), "123456");
        assert_eq!(format_value(1_000_000.25), "1000000.25");
    }

    #[test]
    fn test_accumulated_boundaries() {
        let mut a = 0.0;
        for _ in 0..3 {
            a += 0.1;
        }
        assert_eq!(format_value(a), "0.3");
    }
}
