use {
    anyhow::{Context, Result},
    clap::Parser,
    tracing::{debug, info, warn},
    bigdata_sentiment_core::{
        aggregator::aggregate_with_observer,
        config::{Config, ReportFormat},
        keywords::Lexicon,
        observer::TracingObserver,
    },
    crate::{
        chart::generate_bar_chart,
        cli::Cli,
        data_loading::load_lines,
        progress::Progress,
        report::print_document_summary,
        utils::init_logging,
    },
};

mod chart;
mod cli;
mod data_loading;
mod progress;
mod report;
mod utils;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_error) = match cli.config.as_ref() {
        Some(path) => (Config::load_from(path)?, None),
        None => match Config::try_load() {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        },
    };
    cli.apply_to(&mut config);

    init_logging(&config.logging);
    if let Some(err) = config_error {
        warn!("failed to read config: {}", err);
    }

    info!("bigdata sentiment analysis");

    let lexicon = Lexicon::try_from(&config.keywords).context("failed to compile keyword sets")?;
    debug!("positive words: {:?}", lexicon.positive().words().collect::<Vec<_>>());
    debug!("negative words: {:?}", lexicon.negative().words().collect::<Vec<_>>());

    let input_path = cli.input_path();
    let lines = load_lines(&input_path, &config.input());

    let mut progress = Progress::new("classifying lines".to_owned());
    let summary = aggregate_with_observer(&lines, &lexicon, (TracingObserver, &mut progress));
    progress.finish();

    let report = config.report();
    print_document_summary(&summary, report.verdict.verdict(&summary), report.format)?;

    // keep json output machine readable
    if report.chart && report.format == ReportFormat::Text {
        generate_bar_chart(&summary, &input_path)?;
    }

    Ok(())
}
