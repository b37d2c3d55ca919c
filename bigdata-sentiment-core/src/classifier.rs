use {
    std::fmt,
    serde::Serialize,
    crate::keywords::{KeywordSet, Lexicon},
};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SentimentOutcome {
    Positive,
    Negative,
    Mixed,
    Neutral,
}

impl SentimentOutcome {
    /// Fixed presentation order, also used to break ties between equal counts.
    pub const ALL: [SentimentOutcome; 4] = [
        SentimentOutcome::Positive,
        SentimentOutcome::Negative,
        SentimentOutcome::Mixed,
        SentimentOutcome::Neutral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Mixed => "Mixed",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    pub positive: usize,
    pub negative: usize,
}

impl KeywordCounts {
    pub fn outcome(&self) -> SentimentOutcome {
        match (self.positive > 0, self.negative > 0) {
            (true, false) => SentimentOutcome::Positive,
            (false, true) => SentimentOutcome::Negative,
            (true, true) => SentimentOutcome::Mixed,
            (false, false) => SentimentOutcome::Neutral,
        }
    }
}

pub fn count_keywords(line: &str, positive: &KeywordSet, negative: &KeywordSet) -> KeywordCounts {
    let line = line.to_lowercase();

    KeywordCounts {
        positive: positive.count_in(&line),
        negative: negative.count_in(&line),
    }
}

pub fn classify(line: &str, positive: &KeywordSet, negative: &KeywordSet) -> SentimentOutcome {
    count_keywords(line, positive, negative).outcome()
}

impl Lexicon {
    pub fn count_keywords(&self, line: &str) -> KeywordCounts {
        count_keywords(line, self.positive(), self.negative())
    }

    pub fn classify(&self, line: &str) -> SentimentOutcome {
        self.count_keywords(line).outcome()
    }
}
