use probstat_stats::sets::{SetPair, format_set};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SetsArg {
    /// Elements of A, separated by commas
    #[arg(long)]
    a: String,
    /// Elements of B, separated by commas
    #[arg(long)]
    b: String,
}

pub fn run(arg: &SetsArg) {
    print_sets(&SetPair::parse(&arg.a, &arg.b));
}

pub(super) fn print_sets(sets: &SetPair) {
    println!("A     = {}", format_set(&sets.a));
    println!("B     = {}", format_set(&sets.b));
    println!("A ∪ B = {}", format_set(&sets.union));
    println!("A ∩ B = {}", format_set(&sets.intersection));
    println!("A − B = {}", format_set(&sets.a_minus_b));
    println!("B − A = {}", format_set(&sets.b_minus_a));
}
