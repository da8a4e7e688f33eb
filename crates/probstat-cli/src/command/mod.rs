use clap::{Parser, Subcommand};

use self::{
    chart::ChartArg, combi::CombiArg, demo::DemoArg, describe::DescribeArg, prob::ProbArg,
    sets::SetsArg, tree::TreeArg, view::ViewArg,
};

mod chart;
mod combi;
mod demo;
mod describe;
mod input;
mod prob;
mod sets;
mod tree;
mod view;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summary measures, frequency table, Pareto ranking and stem-and-leaf plot
    Describe(#[clap(flatten)] DescribeArg),
    /// Empirical probability of a threshold event
    Prob(#[clap(flatten)] ProbArg),
    /// Union, intersection and differences of two label sets
    Sets(#[clap(flatten)] SetsArg),
    /// Factorial, permutations and combinations
    Combi(#[clap(flatten)] CombiArg),
    /// Multiplication rule and decision tree
    Tree(#[clap(flatten)] TreeArg),
    /// Chart geometry as JSON
    Chart(#[clap(flatten)] ChartArg),
    /// Browse the charts in the terminal
    View(#[clap(flatten)] ViewArg),
    /// Run every calculation on built-in classroom inputs
    Demo(#[clap(flatten)] DemoArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Prob(arg) => prob::run(&arg)?,
        Mode::Sets(arg) => sets::run(&arg),
        Mode::Combi(arg) => combi::run(&arg)?,
        Mode::Tree(arg) => tree::run(&arg)?,
        Mode::Chart(arg) => chart::run(&arg)?,
        Mode::View(arg) => view::run(&arg)?,
        Mode::Demo(arg) => demo::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_tree_steps() {
        let args = CommandArgs::try_parse_from([
            "probstat",
            "tree",
            "--step",
            "Color=red,blue",
            "--step",
            "Size=S,M,L",
        ])
        .unwrap();
        let Mode::Tree(arg) = args.mode else {
            panic!("expected tree mode");
        };
        assert_eq!(arg.steps.len(), 2);
        assert_eq!(arg.steps[1].name, "Size");
        assert_eq!(arg.steps[1].options, ["S", "M", "L"]);
    }

    #[test]
    fn test_parse_event() {
        let args = CommandArgs::try_parse_from([
            "probstat", "prob", "--data", "1 2 3", "--event", ">=", "--k", "2",
        ])
        .unwrap();
        assert!(matches!(args.mode, Mode::Prob(_)));

        let err = CommandArgs::try_parse_from([
            "probstat", "prob", "--data", "1", "--event", "gt", "--k", "2",
        ]);
        assert!(err.is_err());
    }
}
