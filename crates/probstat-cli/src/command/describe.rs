use std::path::PathBuf;

use probstat_stats::{
    classes::FrequencyTable,
    format::{format_value, round2},
    pareto::ParetoSeries,
    report::DataReport,
    sample::SampleSummary,
};

use crate::{command::input::ReportArg, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Write the full report as JSON instead of tables
    #[arg(long)]
    json: bool,
    /// JSON output file path (defaults to stdout)
    #[arg(long, requires = "json")]
    output: Option<PathBuf>,
}

pub fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let DescribeArg {
        report,
        json,
        output,
    } = arg;

    let report = report.load_report()?;
    if *json {
        Output::save_json(&report, output.clone())?;
    } else {
        print_report(&report);
    }
    Ok(())
}

pub(super) fn print_report(report: &DataReport) {
    print_summary(&report.summary);
    println!();

    println!("Stem-and-leaf");
    print!("{}", report.stem_leaf);
    println!();

    print_frequency_table(&report.table);
    println!();

    print_pareto_table(&report.pareto);
    println!();

    let space = report
        .sample_space
        .iter()
        .map(|&v| format_value(v))
        .collect::<Vec<_>>();
    println!("Sample space ({} distinct values)", space.len());
    println!("  S = {{ {} }}", space.join(", "));
}

fn print_summary(summary: &SampleSummary) {
    println!("Summary");
    println!("  Count:  {:>10}", summary.count);
    println!("  Min:    {:>10}", format_value(summary.min));
    println!("  Max:    {:>10}", format_value(summary.max));
    println!("  Range:  {:>10}", format_value(summary.range));
    println!("  Mean:   {:>10}", format_value(round2(summary.mean)));
    println!("  Median: {:>10}", format_value(summary.median));
    println!("  Mode:   {:>10}", summary.mode.to_string());
}

fn print_frequency_table(table: &FrequencyTable) {
    println!("Frequency table (class width {})", format_value(table.width));
    println!(
        "  {:<20} {:>10} {:>6} {:>6} {:>8} {:>8}",
        "Class", "xi", "fi", "Fi", "fr", "Fr"
    );
    // class(20) + xi(10) + fi(6) + Fi(6) + fr(8) + Fr(8) + spaces(5)
    println!("  {}", "-".repeat(63));
    for class in &table.classes {
        println!(
            "  {:<20} {:>10} {:>6} {:>6} {:>8.4} {:>8.4}",
            class.label,
            format_value(round2(class.midpoint)),
            class.fi,
            class.cumulative_fi,
            class.fr,
            class.cumulative_fr,
        );
    }
    println!("  {}", "-".repeat(63));
    println!("  {:<20} {:>10} {:>6}", "Total", "", table.total);
}

fn print_pareto_table(pareto: &ParetoSeries) {
    println!("Pareto ranking");
    println!("  {:<12} {:>6} {:>8}", "Value", "fi", "% cum.");
    // value(12) + fi(6) + cum(8) + spaces(2)
    println!("  {}", "-".repeat(28));
    for (entry, percent) in pareto.entries.iter().zip(&pareto.cumulative_percent) {
        println!(
            "  {:<12} {:>6} {:>7.2}%",
            entry.label, entry.count, percent
        );
    }
}
