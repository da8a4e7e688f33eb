use probstat_chart::{ChartKind, build_chart};

use crate::{
    command::{chart::CanvasArg, input::ReportArg},
    tui::Tui,
};

use self::app::ChartViewer;

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ViewArg {
    #[clap(flatten)]
    report: ReportArg,
    #[clap(flatten)]
    canvas: CanvasArg,
}

pub fn run(arg: &ViewArg) -> anyhow::Result<()> {
    let canvas = arg.canvas.size()?;
    let report = arg.report.load_report()?;
    let charts = ChartKind::ALL
        .into_iter()
        .map(|kind| build_chart(kind, &report, canvas))
        .collect();

    tracing::info!(count = report.summary.count, "opening chart viewer");
    let mut app = ChartViewer::new(report, charts);
    Tui::new().run(&mut app)
}
