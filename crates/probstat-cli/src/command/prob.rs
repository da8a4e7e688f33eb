use probstat_stats::{
    format::format_value,
    probability::{Comparator, EventProbability},
};

use crate::command::input::DataArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ProbArg {
    #[clap(flatten)]
    input: DataArg,
    /// Event type: ge (x ≥ k), le (x ≤ k) or eq (x = k)
    #[arg(long)]
    event: Comparator,
    /// Threshold value k
    #[arg(long, allow_negative_numbers = true)]
    k: f64,
}

pub fn run(arg: &ProbArg) -> anyhow::Result<()> {
    let ProbArg { input, event, k } = arg;

    let sample = input.load_sample()?;
    let result = EventProbability::compute(&sample, *event, *k);
    println!("Event: {}", result.describe());
    println!(
        "P = {} / {} = {}",
        result.favorable,
        result.total,
        format_value(result.probability)
    );
    println!("    ≈ {:.4} ({:.2}%)", result.probability, result.probability * 100.0);
    Ok(())
}
