use {
    std::{
        io::{self, IsTerminal, Write},
        path::Path,
    },
    anyhow::Result,
    colored::{ColoredString, Colorize},
    bigdata_sentiment_core::{
        aggregator::DocumentSummary,
        classifier::SentimentOutcome,
    },
};

const MAX_BAR_WIDTH: u64 = 40;
const LABEL_WIDTH: usize = 8;

pub fn generate_bar_chart(summary: &DocumentSummary, file_path: &Path) -> Result<()> {
    let file_name = file_path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string());

    let mut stdout = io::stdout().lock();
    colored::control::set_override(stdout.is_terminal());
    write!(stdout, "{}", render_bar_chart(summary, &file_name))?;
    Ok(())
}

pub fn render_bar_chart(summary: &DocumentSummary, file_name: &str) -> String {
    let max = summary.iter().map(|(_, count)| count).max().unwrap_or(0);

    let mut chart = format!("Sentiment Analysis: {}\n", file_name);
    chart.push_str(&format!("{:>width$} | Count\n", "", width = LABEL_WIDTH));

    for (outcome, count) in summary.iter() {
        let bar = paint_bar(outcome, "█".repeat(bar_width(count, max) as usize));
        chart.push_str(&format!("{:>width$} | {} {}\n", outcome.label(), bar, count, width = LABEL_WIDTH));
    }

    chart
}

fn paint_bar(outcome: SentimentOutcome, bar: String) -> ColoredString {
    match outcome {
        SentimentOutcome::Positive => bar.green(),
        SentimentOutcome::Negative => bar.red(),
        SentimentOutcome::Mixed => bar.truecolor(255, 165, 0),
        SentimentOutcome::Neutral => bar.bright_black(),
    }
}

/// Scales `count` against the largest bar. Non-zero counts always get at least one cell.
fn bar_width(count: u64, max: u64) -> u64 {
    if count == 0 || max == 0 {
        0
    } else {
        (count * MAX_BAR_WIDTH / max).max(1)
    }
}
