use {
    serde::Serialize,
    crate::{
        classifier::SentimentOutcome,
        keywords::Lexicon,
        observer::{ClassificationObserver, NoopObserver},
    },
};

/// Per-category line counts for one document. The four counts always sum to the number
/// of lines that were recorded.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentSummary {
    positive: u64,
    negative: u64,
    mixed: u64,
    neutral: u64,
}

impl DocumentSummary {
    pub fn record(&mut self, outcome: SentimentOutcome) {
        *self.count_mut(outcome) += 1;
    }

    pub fn count(&self, outcome: SentimentOutcome) -> u64 {
        match outcome {
            SentimentOutcome::Positive => self.positive,
            SentimentOutcome::Negative => self.negative,
            SentimentOutcome::Mixed => self.mixed,
            SentimentOutcome::Neutral => self.neutral,
        }
    }

    fn count_mut(&mut self, outcome: SentimentOutcome) -> &mut u64 {
        match outcome {
            SentimentOutcome::Positive => &mut self.positive,
            SentimentOutcome::Negative => &mut self.negative,
            SentimentOutcome::Mixed => &mut self.mixed,
            SentimentOutcome::Neutral => &mut self.neutral,
        }
    }

    pub fn positive(&self) -> u64 {
        self.positive
    }

    pub fn negative(&self) -> u64 {
        self.negative
    }

    pub fn mixed(&self) -> u64 {
        self.mixed
    }

    pub fn neutral(&self) -> u64 {
        self.neutral
    }

    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.mixed + self.neutral
    }

    /// Counts in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentOutcome, u64)> + '_ {
        SentimentOutcome::ALL.into_iter().map(move |outcome| (outcome, self.count(outcome)))
    }
}

pub fn aggregate<I>(lines: I, lexicon: &Lexicon) -> DocumentSummary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    aggregate_with_observer(lines, lexicon, NoopObserver)
}

pub fn aggregate_with_observer<I, O>(lines: I, lexicon: &Lexicon, mut observer: O) -> DocumentSummary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    O: ClassificationObserver,
{
    let mut summary = DocumentSummary::default();

    for line in lines {
        let line = line.as_ref();
        let counts = lexicon.count_keywords(line);
        let outcome = counts.outcome();

        observer.on_classified(line, counts, outcome);
        summary.record(outcome);
    }

    summary
}
