//! Free-text input parsing.
//!
//! Numeric lists may be separated by commas, spaces or newlines in any
//! combination. Tokens that do not form a finite number are skipped rather
//! than reported as errors; callers that want to tell the user about them can
//! use [`parse_numbers_detailed`].

use std::collections::BTreeSet;

use serde::Serialize;

/// Result of parsing a numeric list, keeping track of skipped tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedNumbers {
    /// Finite numbers in input order.
    pub values: Vec<f64>,
    /// Non-empty tokens that were not finite numbers, in input order.
    pub rejected: Vec<String>,
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parses a numeric list, silently dropping tokens that are not finite numbers.
///
/// # Examples
///
/// ```
/// use probstat_stats::parse::parse_numbers;
///
/// assert_eq!(parse_numbers("1, 2,,3  4"), vec![1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(parse_numbers("5\n-1.5, abc, inf"), vec![5.0, -1.5]);
/// assert!(parse_numbers("").is_empty());
/// ```
#[must_use]
pub fn parse_numbers(raw: &str) -> Vec<f64> {
    parse_numbers_detailed(raw).values
}

/// Parses a numeric list and reports the tokens that were dropped.
///
/// # Examples
///
/// ```
/// use probstat_stats::parse::parse_numbers_detailed;
///
/// let parsed = parse_numbers_detailed("1, x, 2, NaN");
/// assert_eq!(parsed.values, vec![1.0, 2.0]);
/// assert_eq!(parsed.rejected, vec!["x".to_string(), "NaN".to_string()]);
/// ```
#[must_use]
pub fn parse_numbers_detailed(raw: &str) -> ParsedNumbers {
    let mut parsed = ParsedNumbers::default();
    for token in tokens(raw) {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => parsed.values.push(value),
            _ => parsed.rejected.push(token.to_string()),
        }
    }
    parsed
}

/// Splits a comma-separated list into trimmed, non-empty labels, keeping order
/// and duplicates.
///
/// # Examples
///
/// ```
/// use probstat_stats::parse::parse_options;
///
/// assert_eq!(parse_options(" red, blue,, red "), vec!["red", "blue", "red"]);
/// ```
#[must_use]
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a comma-separated list into a deduplicated label set.
///
/// Labels are compared by exact string equality after trimming.
///
/// # Examples
///
/// ```
/// use probstat_stats::parse::parse_labels;
///
/// let labels = parse_labels("b, a, b ,c");
/// assert_eq!(labels.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn parse_labels(raw: &str) -> BTreeSet<String> {
    parse_options(raw).into_iter().collect()
}
