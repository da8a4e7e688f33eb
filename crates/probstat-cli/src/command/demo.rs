use anyhow::Context as _;
use probstat_stats::{
    DEMO_DATA,
    combinatorics::ComboResult,
    counting_tree::{CountingTree, MAX_TREE_LINES, Step},
    report::DataReport,
    sets::SetPair,
};

use crate::command::{combi, describe, sets, tree};

const DEMO_SET_A: &str = "1, 2, 3, 4, 5";
const DEMO_SET_B: &str = "4, 5, 6, 7";
const DEMO_COMBI: (i64, i64) = (5, 3);
const DEMO_STEPS: [(&str, &str); 3] = [
    ("Shirt", "red, blue, green"),
    ("Pants", "jeans, shorts"),
    ("Shoes", "sneakers, boots"),
];

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DemoArg {
    /// Class width of the frequency table
    #[arg(long, short = 'w', default_value_t = 8.0)]
    width: f64,
}

pub fn run(arg: &DemoArg) -> anyhow::Result<()> {
    tracing::info!(width = arg.width, "running demo");

    let report = DataReport::parse(DEMO_DATA, arg.width).context("Invalid demo class width")?;
    println!("== Data: {DEMO_DATA}");
    println!();
    describe::print_report(&report);
    println!();

    println!("== Sets");
    sets::print_sets(&SetPair::parse(DEMO_SET_A, DEMO_SET_B));
    println!();

    println!("== Counting");
    let (n, r) = DEMO_COMBI;
    combi::print_combi(&ComboResult::compute(n, r)?);
    println!();

    println!("== Decision tree");
    let steps = DEMO_STEPS
        .iter()
        .map(|(name, options)| Step::parse(name, options))
        .collect();
    tree::print_tree(&CountingTree::new(steps)?, MAX_TREE_LINES);
    Ok(())
}
