use anyhow::Context as _;
use probstat_stats::counting_tree::{CountingTree, MAX_TREE_LINES, Step};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TreeArg {
    /// A step of the process as NAME=OPTION1,OPTION2,... (repeat for each step)
    #[arg(
        long = "step",
        value_name = "NAME=OPTIONS",
        value_parser = parse_step,
        required = true
    )]
    pub steps: Vec<Step>,
    /// Maximum number of tree lines to print
    #[arg(long, default_value_t = MAX_TREE_LINES)]
    max_lines: usize,
}

fn parse_step(s: &str) -> Result<Step, String> {
    let (name, options) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=OPTIONS, got '{s}'"))?;
    Ok(Step::parse(name, options))
}

pub fn run(arg: &TreeArg) -> anyhow::Result<()> {
    let tree = CountingTree::new(arg.steps.clone()).context("Invalid process")?;
    print_tree(&tree, arg.max_lines);
    Ok(())
}

pub(super) fn print_tree(tree: &CountingTree, max_lines: usize) {
    println!("Multiplication rule");
    for (i, step) in tree.steps.iter().enumerate() {
        println!(
            "  Step {} ({}): {} option(s): {}",
            i + 1,
            step.name,
            step.options.len(),
            step.options.join(", ")
        );
    }
    println!("  Total = {}", tree.formula());
    println!();
    print!("{}", tree.render(max_lines));
}
