use std::path::PathBuf;

use anyhow::Context as _;
use probstat_stats::{parse::parse_numbers_detailed, report::DataReport, sample::Sample};

use crate::util;

/// Where the numeric data comes from.
///
/// Without `--data` or `--file`, the data is read from stdin.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DataArg {
    /// Numbers separated by commas, spaces or newlines
    #[arg(long, conflicts_with = "file")]
    pub data: Option<String>,
    /// File containing the numbers
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl DataArg {
    pub fn read_text(&self) -> anyhow::Result<String> {
        match (&self.data, &self.file) {
            (Some(data), _) => Ok(data.clone()),
            (None, Some(path)) => util::read_text_file(path),
            (None, None) => util::read_stdin(),
        }
    }

    /// Reads and parses the data, warning about tokens that are not numbers.
    pub fn load_sample(&self) -> anyhow::Result<Sample> {
        let parsed = parse_numbers_detailed(&self.read_text()?);
        if !parsed.rejected.is_empty() {
            tracing::warn!(
                count = parsed.rejected.len(),
                tokens = ?parsed.rejected,
                "ignored non-numeric tokens"
            );
        }
        tracing::debug!(count = parsed.values.len(), "parsed numeric data");
        Sample::new(parsed.values).context("Invalid data")
    }
}

/// Data plus the class width used for frequency tables.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    pub input: DataArg,
    /// Class width (amplitude) of the frequency table
    #[arg(long, short = 'w', allow_negative_numbers = true)]
    pub width: f64,
}

impl ReportArg {
    pub fn load_report(&self) -> anyhow::Result<DataReport> {
        let sample = self.input.load_sample()?;
        DataReport::new(sample, self.width).context("Invalid class width")
    }
}
