//! Set operations over string labels.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::parse::parse_labels;

/// Two label sets together with their derived operations.
///
/// Every set is kept sorted by byte-wise string comparison so that output is
/// deterministic.
///
/// # Examples
///
/// ```
/// use probstat_stats::sets::SetPair;
///
/// let sets = SetPair::parse("a, b, c", "b, c, d");
/// assert_eq!(sets.union, ["a", "b", "c", "d"]);
/// assert_eq!(sets.intersection, ["b", "c"]);
/// assert_eq!(sets.a_minus_b, ["a"]);
/// assert_eq!(sets.b_minus_a, ["d"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetPair {
    pub a: Vec<String>,
    pub b: Vec<String>,
    /// `A ∪ B`
    pub union: Vec<String>,
    /// `A ∩ B`
    pub intersection: Vec<String>,
    /// `A − B`
    pub a_minus_b: Vec<String>,
    /// `B − A`
    pub b_minus_a: Vec<String>,
}

impl SetPair {
    /// Parses two comma-separated label lists and computes the operations.
    #[must_use]
    pub fn parse(a: &str, b: &str) -> Self {
        Self::new(&parse_labels(a), &parse_labels(b))
    }

    #[must_use]
    pub fn new(a: &BTreeSet<String>, b: &BTreeSet<String>) -> Self {
        fn collect<'a>(it: impl Iterator<Item = &'a String>) -> Vec<String> {
            it.cloned().collect()
        }
        Self {
            a: collect(a.iter()),
            b: collect(b.iter()),
            union: collect(a.union(b)),
            intersection: collect(a.intersection(b)),
            a_minus_b: collect(a.difference(b)),
            b_minus_a: collect(b.difference(a)),
        }
    }
}

/// Formats a set as `{ a, b, c }`.
///
/// # Examples
///
/// ```
/// # use probstat_stats::sets::format_set;
/// assert_eq!(format_set(&["x".to_string(), "y".to_string()]), "{ x, y }");
/// assert_eq!(format_set(&[]), "{  }");
/// ```
#[must_use]
pub fn format_set(labels: &[String]) -> String {
    format!("{{ {} }}", labels.join(", "))
}
