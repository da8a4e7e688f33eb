//! Multiplication rule for multi-step processes and its decision tree.
//!
//! A process made of independent steps, each with a list of options, has as
//! many outcomes as the product of the option counts. The tree lists every
//! path, one option per line:
//!
//! ```text
//! Start
//!  ├─ red
//!  │  ├─ S
//!  │  └─ M
//!  └─ blue
//!     ├─ S
//!     └─ M
//! ```

use std::fmt::Write as _;

use num_bigint::BigUint;
use serde::Serialize;

use crate::{combinatorics::serialize_decimal, parse::parse_options};

/// Maximum number of lines of a rendered tree, including the root line.
pub const MAX_TREE_LINES: usize = 350;

/// Minimum number of steps a process needs.
pub const MIN_STEPS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CountingTreeError {
    #[display("at least {MIN_STEPS} steps are required (got {actual})")]
    NotEnoughSteps { actual: usize },
    #[display("step '{name}' needs at least one option")]
    EmptyStep { name: String },
}

/// One step of a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub name: String,
    pub options: Vec<String>,
}

impl Step {
    /// Creates a step from a comma-separated option list.
    ///
    /// # Examples
    ///
    /// ```
    /// # use probstat_stats::counting_tree::Step;
    /// let step = Step::parse("Color", "red, blue");
    /// assert_eq!(step.options, ["red", "blue"]);
    /// ```
    #[must_use]
    pub fn parse(name: &str, options: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            options: parse_options(options),
        }
    }
}

/// A multi-step process counted with the multiplication rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountingTree {
    pub steps: Vec<Step>,
    /// Product of the option counts.
    #[serde(serialize_with = "serialize_decimal")]
    pub total: BigUint,
}

impl CountingTree {
    /// Validates the steps and counts the outcomes.
    ///
    /// Steps after the first [`MIN_STEPS`] may be left without options, in
    /// which case they are dropped. Required steps must have at least one
    /// option.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstat_stats::counting_tree::{CountingTree, Step};
    ///
    /// let tree = CountingTree::new(vec![
    ///     Step::parse("Color", "red, blue"),
    ///     Step::parse("Size", "S, M, L"),
    ///     Step::parse("Extra", ""),
    /// ])
    /// .unwrap();
    /// assert_eq!(tree.total.to_string(), "6");
    /// assert_eq!(tree.formula(), "2 × 3 = 6");
    /// ```
    pub fn new(steps: Vec<Step>) -> Result<Self, CountingTreeError> {
        if steps.len() < MIN_STEPS {
            return Err(CountingTreeError::NotEnoughSteps {
                actual: steps.len(),
            });
        }
        if let Some(step) = steps[..MIN_STEPS].iter().find(|s| s.options.is_empty()) {
            return Err(CountingTreeError::EmptyStep {
                name: step.name.clone(),
            });
        }

        let steps = steps
            .into_iter()
            .enumerate()
            .filter(|(i, s)| *i < MIN_STEPS || !s.options.is_empty())
            .map(|(_, s)| s)
            .collect::<Vec<_>>();
        let total = steps
            .iter()
            .map(|s| BigUint::from(s.options.len()))
            .product::<BigUint>();
        Ok(Self { steps, total })
    }

    /// Returns the multiplication written out, e.g. `2 × 3 × 4 = 24`.
    #[must_use]
    pub fn formula(&self) -> String {
        let factors = self
            .steps
            .iter()
            .map(|s| s.options.len().to_string())
            .collect::<Vec<_>>()
            .join(" × ");
        format!("{factors} = {}", self.total)
    }

    /// Renders the decision tree, truncated after `max_lines` lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use probstat_stats::counting_tree::{CountingTree, Step};
    ///
    /// let tree = CountingTree::new(vec![
    ///     Step::parse("Color", "red, blue"),
    ///     Step::parse("Size", "S"),
    /// ])
    /// .unwrap();
    /// assert_eq!(
    ///     tree.render(350),
    ///     "Start\n ├─ red\n │  └─ S\n └─ blue\n    └─ S\n"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self, max_lines: usize) -> String {
        let mut renderer = TreeRenderer {
            out: String::from("Start\n"),
            lines: 1,
            max_lines,
        };
        if renderer.render_level(&self.steps, "").is_err() {
            let _ = write!(
                renderer.out,
                "\n... (tree truncated to {max_lines} lines)\n"
            );
        }
        renderer.out
    }
}

/// Marker for a tree that hit the line limit.
struct Truncated;

struct TreeRenderer {
    out: String,
    lines: usize,
    max_lines: usize,
}

impl TreeRenderer {
    fn render_level(&mut self, steps: &[Step], prefix: &str) -> Result<(), Truncated> {
        let Some((step, rest)) = steps.split_first() else {
            return Ok(());
        };
        for (i, option) in step.options.iter().enumerate() {
            let is_last = i == step.options.len() - 1;
            let connector = if is_last { " └─" } else { " ├─" };
            let _ = writeln!(self.out, "{prefix}{connector} {option}");
            self.lines += 1;
            if self.lines >= self.max_lines {
                return Err(Truncated);
            }

            let child_prefix = format!("{prefix}{}", if is_last { "   " } else { " │ " });
            self.render_level(rest, &child_prefix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(specs: &[(&str, &str)]) -> Vec<Step> {
        specs
            .iter()
            .map(|(name, options)| Step::parse(name, options))
            .collect()
    }

    #[test]
    fn test_requires_two_steps() {
        let err = CountingTree::new(steps(&[("A", "x")])).unwrap_err();
        assert_eq!(err, CountingTreeError::NotEnoughSteps { actual: 1 });
    }

    #[test]
    fn test_required_step_without_options() {
        let err = CountingTree::new(steps(&[("A", "x"), ("B", " , ")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "step 'B' needs at least one option"
        );
    }

    #[test]
    fn test_three_steps() {
        let tree =
            CountingTree::new(steps(&[("A", "a1,a2"), ("B", "b1"), ("C", "c1,c2")])).unwrap();
        assert_eq!(tree.total, BigUint::from(4_u32));
        assert_eq!(tree.formula(), "2 × 1 × 2 = 4");
        let expected = "Start\n\
             \x20├─ a1\n\
             \x20│  └─ b1\n\
             \x20│     ├─ c1\n\
             \x20│     └─ c2\n\
             \x20└─ a2\n\
             \x20   └─ b1\n\
             \x20      ├─ c1\n\
             \x20      └─ c2\n";
        assert_eq!(tree.render(MAX_TREE_LINES), expected);
    }

    #[test]
    fn test_truncation() {
        let many = (0..30).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        let tree = CountingTree::new(steps(&[("A", &many), ("B", &many)])).unwrap();
        assert_eq!(tree.total, BigUint::from(900_u32));

        let rendered = tree.render(10);
        assert!(rendered.ends_with("\n... (tree truncated to 10 lines)\n"));
        // Root line plus nine option lines
        let body = rendered.split("\n\n").next().unwrap();
        assert_eq!(body.lines().count(), 10);
    }

    #[test]
    fn test_total_beyond_machine_integers() {
        let options = (0..10).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        let many = (0..40)
            .map(|i| Step::parse(&format!("S{i}"), &options))
            .collect();
        let tree = CountingTree::new(many).unwrap();

        let expected = format!("1{}", "0".repeat(40));
        assert_eq!(tree.total.to_string(), expected);
        assert!(tree.formula().ends_with(&format!("× 10 = {expected}")));

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["total"], serde_json::Value::String(expected));

        // Rendering stays bounded however large the total is
        let rendered = tree.render(MAX_TREE_LINES);
        assert!(rendered.ends_with(&format!("(tree truncated to {MAX_TREE_LINES} lines)\n")));
    }
}
