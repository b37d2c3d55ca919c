use {
    tracing::debug,
    crate::classifier::{KeywordCounts, SentimentOutcome},
};

pub const CLASSIFICATION_TARGET: &str = "bigdata_sentiment::classification";

/// Hook invoked by the aggregator after every line classification.
pub trait ClassificationObserver {
    fn on_classified(&mut self, line: &str, counts: KeywordCounts, outcome: SentimentOutcome);
}

pub struct NoopObserver;

impl ClassificationObserver for NoopObserver {
    fn on_classified(&mut self, _line: &str, _counts: KeywordCounts, _outcome: SentimentOutcome) {}
}

/// Logs every decision at debug level under [`CLASSIFICATION_TARGET`].
pub struct TracingObserver;

impl ClassificationObserver for TracingObserver {
    fn on_classified(&mut self, line: &str, counts: KeywordCounts, outcome: SentimentOutcome) {
        debug!(
            target: CLASSIFICATION_TARGET,
            positive = counts.positive,
            negative = counts.negative,
            "line: '{}', sentiment: {}", line, outcome,
        );
    }
}

impl<T: ClassificationObserver + ?Sized> ClassificationObserver for &mut T {
    fn on_classified(&mut self, line: &str, counts: KeywordCounts, outcome: SentimentOutcome) {
        (**self).on_classified(line, counts, outcome)
    }
}

impl<A: ClassificationObserver, B: ClassificationObserver> ClassificationObserver for (A, B) {
    fn on_classified(&mut self, line: &str, counts: KeywordCounts, outcome: SentimentOutcome) {
        self.0.on_classified(line, counts, outcome);
        self.1.on_classified(line, counts, outcome);
    }
}
