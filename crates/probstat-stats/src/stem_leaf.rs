//! Stem-and-leaf display.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// One stem with its sorted leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemLeafRow {
    pub stem: i64,
    pub leaves: Vec<u8>,
}

/// A stem-and-leaf plot with tens as stems and units as leaves.
///
/// Values are rounded to the nearest integer (halves round up) first. The stem
/// is the integer truncated toward zero after dividing by ten and the leaf is
/// the absolute last digit, so `-5` and `5` share stem `0`.
///
/// # Examples
///
/// ```
/// use probstat_stats::stem_leaf::StemLeaf;
///
/// let plot = StemLeaf::new(&[12.0, 15.0, 21.4, 9.6, 13.0]);
/// assert_eq!(
///     plot.to_string(),
///     "Stem | Leaves\n-------------\n    1 | 0 2 3 5\n    2 | 1\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemLeaf {
    pub rows: Vec<StemLeafRow>,
}

impl StemLeaf {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut stems = BTreeMap::<i64, Vec<u8>>::new();
        for &x in values {
            let v = (x + 0.5).floor() as i64;
            let stem = v / 10;
            let leaf = (v % 10).unsigned_abs() as u8;
            stems.entry(stem).or_default().push(leaf);
        }

        let rows = stems
            .into_iter()
            .map(|(stem, mut leaves)| {
                leaves.sort_unstable();
                StemLeafRow { stem, leaves }
            })
            .collect();
        Self { rows }
    }
}

impl fmt::Display for StemLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stem | Leaves")?;
        writeln!(f, "-------------")?;
        for row in &self.rows {
            let leaves = row
                .leaves
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{:>5} | {leaves}", row.stem)?;
        }
        Ok(())
    }
}
