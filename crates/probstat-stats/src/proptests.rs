//! Property-based tests for the invariants of the statistics core.

use proptest::prelude::*;

use crate::{
    classes::FrequencyTable,
    combinatorics::{combination, factorial, permutation},
    descriptive::{Mode, mode},
    pareto::ParetoSeries,
};

fn sample_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0_f64, 1..80)
}

proptest! {
    /// Every value lands in exactly one class.
    #[test]
    fn prop_frequencies_sum_to_sample_size(
        data in sample_values(),
        width in 0.5..200.0_f64,
    ) {
        let table = FrequencyTable::new(&data, width).unwrap();
        let sum = table.classes.iter().map(|c| c.fi).sum::<u64>();
        prop_assert_eq!(sum, data.len() as u64);
        prop_assert_eq!(table.classes.last().unwrap().cumulative_fi, data.len() as u64);
    }

    /// The cumulative relative frequency of the last class is 1.
    #[test]
    fn prop_last_cumulative_relative_is_one(
        data in sample_values(),
        width in 0.5..200.0_f64,
    ) {
        let table = FrequencyTable::new(&data, width).unwrap();
        let last = table.classes.last().unwrap();
        prop_assert!((last.cumulative_fr - 1.0).abs() < 1e-9);
    }

    /// Classes are contiguous and cover the data range.
    #[test]
    fn prop_classes_contiguous_and_covering(
        data in sample_values(),
        width in 0.5..200.0_f64,
    ) {
        let table = FrequencyTable::new(&data, width).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(table.classes[0].start, min);
        prop_assert!(table.classes.last().unwrap().end > max);
        for pair in table.classes.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    /// Choosing r is the same as leaving out n - r.
    #[test]
    fn prop_combination_symmetry(n in 0_i64..60, r_frac in 0.0..=1.0_f64) {
        #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let r = ((n as f64) * r_frac).floor() as i64;
        prop_assert_eq!(combination(n, r).unwrap(), combination(n, n - r).unwrap());
    }

    /// C(n, r) · r! = P(n, r).
    #[test]
    fn prop_combination_times_r_factorial(n in 0_i64..60, r in 0_i64..60) {
        prop_assume!(r <= n);
        let lhs = combination(n, r).unwrap() * factorial(r).unwrap();
        prop_assert_eq!(lhs, permutation(n, r).unwrap());
    }

    /// A mode, when present, occurs at least twice and at least as often as any value.
    #[test]
    fn prop_mode_is_most_frequent(data in prop::collection::vec(0_u8..10, 0..40)) {
        let values = data.iter().copied().map(f64::from).collect::<Vec<_>>();
        let count = |v: f64| values.iter().filter(|&&x| x == v).count();
        match mode(&values) {
            Mode::Value(m) => {
                let best = count(m);
                prop_assert!(best >= 2);
                prop_assert!(values.iter().all(|&x| count(x) <= best));
            }
            Mode::None => prop_assert!(values.iter().all(|&x| count(x) == 1)),
        }
    }

    /// Pareto entries are ranked by descending count and the percentages reach 100.
    #[test]
    fn prop_pareto_ranked(data in prop::collection::vec(0_u8..20, 1..60)) {
        let values = data.iter().copied().map(f64::from).collect::<Vec<_>>();
        let series = ParetoSeries::from_values(&values);
        prop_assert!(series.entries.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert_eq!(series.total, values.len() as u64);
        let last = *series.cumulative_percent.last().unwrap();
        prop_assert!((last - 100.0).abs() < 1e-9);
    }
}
