use std::path::PathBuf;

use probstat_chart::{ChartKind, build_chart, layout::CanvasSize};

use crate::{command::input::ReportArg, util::Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ChartKindArg {
    Histogram,
    Polygon,
    Ogive,
    Pareto,
}

impl From<ChartKindArg> for ChartKind {
    fn from(kind: ChartKindArg) -> Self {
        match kind {
            ChartKindArg::Histogram => ChartKind::Histogram,
            ChartKindArg::Polygon => ChartKind::FrequencyPolygon,
            ChartKindArg::Ogive => ChartKind::Ogive,
            ChartKindArg::Pareto => ChartKind::Pareto,
        }
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CanvasArg {
    /// Canvas width
    #[arg(long, default_value_t = 900.0)]
    canvas_width: f64,
    /// Canvas height
    #[arg(long, default_value_t = 300.0)]
    canvas_height: f64,
}

impl CanvasArg {
    pub fn size(&self) -> anyhow::Result<CanvasSize> {
        let Self {
            canvas_width: width,
            canvas_height: height,
        } = *self;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            anyhow::bail!("Canvas size must be positive (got {width}x{height})");
        }
        Ok(CanvasSize { width, height })
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ChartArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Chart to lay out
    #[arg(long)]
    kind: ChartKindArg,
    #[clap(flatten)]
    canvas: CanvasArg,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn run(arg: &ChartArg) -> anyhow::Result<()> {
    let ChartArg {
        report,
        kind,
        canvas,
        output,
    } = arg;

    let canvas = canvas.size()?;
    let report = report.load_report()?;
    let chart = build_chart((*kind).into(), &report, canvas);
    Output::save_json(&chart, output.clone())?;
    Ok(())
}
