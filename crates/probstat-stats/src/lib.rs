//! Descriptive statistics, counting and probability for classroom datasets.
//!
//! This crate provides the computational core behind the `probstat` tools:
//!
//! - **Parsing**: Turn free text into finite numbers or label sets
//! - **Descriptive statistics**: Mean, median and mode
//! - **Class intervals**: Fixed-width frequency tables with cumulative frequencies
//! - **Combinatorics**: Factorials, permutations and combinations as big integers
//! - **Empirical probability**: Observed frequency of threshold events
//! - **Set algebra**: Union, intersection and differences over labels
//! - **Pareto ranking**: Counts sorted descending with cumulative percentages
//! - **Stem-and-leaf** plots and **multiplication-rule** trees
//!
//! Every function is a pure transformation from explicit inputs to explicit
//! outputs. Inputs that cannot be used are reported through the error types
//! in [`error`], [`combinatorics::CombinatoricsError`] and
//! [`counting_tree::CountingTreeError`].
//!
//! # Modules
//!
//! - [`parse`]: Numeric and label list parsing
//! - [`sample`]: Validated samples and summary measures
//! - [`descriptive`]: Mean, median and mode
//! - [`classes`]: Class intervals and frequency tables
//! - [`combinatorics`]: Arbitrary-precision counting
//! - [`probability`]: Empirical event probability
//! - [`sets`]: Set operations over labels
//! - [`pareto`]: Pareto ranking
//! - [`stem_leaf`]: Stem-and-leaf plots
//! - [`counting_tree`]: Multiplication rule and decision trees
//! - [`report`]: All sample statistics in one structure
//!
//! # Examples
//!
//! ## Building a frequency table
//!
//! ```
//! use probstat_stats::{classes::FrequencyTable, parse::parse_numbers};
//!
//! let data = parse_numbers("12, 13, 15, 15, 17, 21, 24, 28");
//! let table = FrequencyTable::new(&data, 5.0).unwrap();
//! assert_eq!(table.classes[0].label, "[12-17)");
//! assert_eq!(table.classes[0].fi, 4);
//! ```
//!
//! ## Counting
//!
//! ```
//! use probstat_stats::combinatorics::combination;
//!
//! assert_eq!(combination(49, 6).unwrap().to_string(), "13983816");
//! ```

pub mod classes;
pub mod combinatorics;
pub mod counting_tree;
pub mod descriptive;
pub mod error;
pub mod format;
pub mod parse;
pub mod pareto;
pub mod probability;
pub mod report;
pub mod sample;
pub mod sets;
pub mod stem_leaf;

#[cfg(test)]
mod proptests;

/// A classroom dataset of 29 values used by demos and tests.
pub const DEMO_DATA: &str = "12, 13, 15, 15, 17, 21, 24, 28, 32, 35, 36, 37, 37, 39, 39, 40, \
                             41, 44, 44, 51, 54, 56, 59, 59, 62, 64, 65, 65, 28";
