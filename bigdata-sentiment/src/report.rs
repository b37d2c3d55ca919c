use {
    std::io::{self, Write},
    anyhow::Result,
    serde::Serialize,
    bigdata_sentiment_core::{
        aggregator::DocumentSummary,
        config::ReportFormat,
        verdict::Verdict,
    },
};

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a DocumentSummary,
    verdict: Verdict,
}

pub fn print_document_summary(summary: &DocumentSummary, verdict: Verdict, format: ReportFormat) -> Result<()> {
    let report = match format {
        ReportFormat::Text => text_report(summary, verdict),
        ReportFormat::Json => json_report(summary, verdict)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", report)?;
    Ok(())
}

fn text_report(summary: &DocumentSummary, verdict: Verdict) -> String {
    format!(
        "Document Summary:\nPositive = {}, Negative = {}, Mixed = {}, Neutral = {} \nDocument Verdict: {}",
        summary.positive(),
        summary.negative(),
        summary.mixed(),
        summary.neutral(),
        verdict,
    )
}

fn json_report(summary: &DocumentSummary, verdict: Verdict) -> Result<String> {
    Ok(serde_json::to_string(&JsonReport { summary, verdict })?)
}
