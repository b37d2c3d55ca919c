use {
    std::{env, path::{Path, PathBuf}},
    clap::Parser,
    bigdata_sentiment_core::{
        config::{Config, InputFormat, ReportFormat},
        verdict::VerdictMode,
    },
};

const SAMPLE_DATA_FILE: &str = "sample_data/sample_us_posts.txt";
const CHECKOUT_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/..");

/// Sentiment analysis of social media posts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to input text file [default: bundled sample posts]
    pub filepath: Option<PathBuf>,
    /// Do not display bar chart
    #[arg(long)]
    pub no_chart: bool,
    /// Config file to use instead of ./config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Verdict to report: pairwise or dominant
    #[arg(long)]
    pub verdict: Option<VerdictMode>,
    /// Report format: text or json
    #[arg(long)]
    pub format: Option<ReportFormat>,
    /// Input format: lines or csv
    #[arg(long)]
    pub input_format: Option<InputFormat>,
    /// Csv column holding the text to analyze
    #[arg(long)]
    pub csv_column: Option<String>,
}

impl Cli {
    pub fn input_path(&self) -> PathBuf {
        match self.filepath.as_ref() {
            Some(path) => path.clone(),
            None => sample_data_path(),
        }
    }

    /// Command line flags take precedence over the config file.
    pub fn apply_to(&self, config: &mut Config) {
        let mut report = config.report();
        let mut input = config.input();

        if self.no_chart {
            report.chart = false;
        }
        if let Some(verdict) = self.verdict {
            report.verdict = verdict;
        }
        if let Some(format) = self.format {
            report.format = format;
        }
        if let Some(format) = self.input_format {
            input.format = format;
        }
        if let Some(column) = self.csv_column.as_ref() {
            input.csv_column = column.clone();
        }

        config.report = Some(report);
        config.input = Some(input);
    }
}

/// Sample posts shipped next to the executable, falling back to the source checkout the
/// binary was built from.
fn sample_data_path() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let candidates: Vec<PathBuf> = exe_dir.into_iter()
        .chain([PathBuf::from(CHECKOUT_ROOT)])
        .map(|root| root.join(SAMPLE_DATA_FILE))
        .collect();

    first_existing(&candidates)
}

fn first_existing(candidates: &[PathBuf]) -> PathBuf {
    candidates.iter()
        .find(|path| path.is_file())
        .or_else(|| candidates.last())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(SAMPLE_DATA_FILE))
}
