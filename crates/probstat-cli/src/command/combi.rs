use anyhow::Context as _;
use probstat_stats::combinatorics::ComboResult;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CombiArg {
    /// Number of elements n
    #[arg(allow_negative_numbers = true)]
    n: i64,
    /// Number of elements chosen r
    #[arg(allow_negative_numbers = true)]
    r: i64,
}

pub fn run(arg: &CombiArg) -> anyhow::Result<()> {
    let result = ComboResult::compute(arg.n, arg.r)
        .with_context(|| format!("Cannot count arrangements for n={}, r={}", arg.n, arg.r))?;
    print_combi(&result);
    Ok(())
}

pub(super) fn print_combi(result: &ComboResult) {
    let ComboResult {
        n,
        r,
        factorial,
        permutations,
        combinations,
    } = result;
    println!("{n}! = {factorial}");
    println!("P({n}, {r}) = {n}! / ({n} - {r})! = {permutations}");
    println!("C({n}, {r}) = {n}! / ({r}! ({n} - {r})!) = {combinations}");
}
