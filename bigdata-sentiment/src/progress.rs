// indicatif is not used here because it cannot output progress to non-tty
use {
    std::time::{Duration, Instant},
    tracing::info,
    bigdata_sentiment_core::{
        classifier::{KeywordCounts, SentimentOutcome},
        observer::ClassificationObserver,
    },
};

const REPORT_INTERVAL: Duration = Duration::from_secs(10);

pub struct Progress {
    message: String,
    started_at: Instant,
    reported_at: Instant,
    total_processed: u64,
}

impl Progress {
    pub fn new(message: String) -> Self {
        Self {
            message,
            started_at: Instant::now(),
            reported_at: Instant::now(),
            total_processed: 0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.total_processed += 1;

        let now = Instant::now();
        if now - self.reported_at >= REPORT_INTERVAL {
            self.reported_at = now;
            info!("{}: {} total ({:.2}/second)", self.message, self.total_processed, self.rate(now));
            true
        } else {
            false
        }
    }

    pub fn finish(&self) {
        info!("{}: done, {} total ({:.2}/second)", self.message, self.total_processed, self.rate(Instant::now()));
    }

    pub fn total_processed(&self) -> u64 {
        self.total_processed
    }

    fn rate(&self, now: Instant) -> f32 {
        let elapsed = (now - self.started_at).as_secs_f32();
        if elapsed > 0.0 {
            self.total_processed as f32 / elapsed
        } else {
            0.0
        }
    }
}

impl ClassificationObserver for Progress {
    fn on_classified(&mut self, _line: &str, _counts: KeywordCounts, _outcome: SentimentOutcome) {
        self.update();
    }
}
