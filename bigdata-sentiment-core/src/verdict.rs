use {
    std::{cmp::Ordering, fmt, str::FromStr},
    serde::{Serialize, Deserialize},
    crate::{
        aggregator::DocumentSummary,
        classifier::SentimentOutcome,
    },
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerdictMode {
    #[default]
    Pairwise,
    Dominant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairwiseVerdict {
    Happier,
    Sadder,
    Tied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pairwise(PairwiseVerdict),
    Dominant(SentimentOutcome),
}

impl PairwiseVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Happier => "Happier",
            Self::Sadder => "Sadder",
            Self::Tied => "Tied",
        }
    }
}

impl fmt::Display for PairwiseVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pairwise(verdict) => fmt::Display::fmt(verdict, f),
            Self::Dominant(outcome) => fmt::Display::fmt(outcome, f),
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for VerdictMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.to_lowercase().as_str() {
            "pairwise" => Self::Pairwise,
            "dominant" => Self::Dominant,
            other => return Err(format!("unexpected verdict mode: {}", other)),
        })
    }
}

pub fn pairwise_verdict(summary: &DocumentSummary) -> PairwiseVerdict {
    match summary.positive().cmp(&summary.negative()) {
        Ordering::Greater => PairwiseVerdict::Happier,
        Ordering::Less => PairwiseVerdict::Sadder,
        Ordering::Equal => PairwiseVerdict::Tied,
    }
}

/// Category with the highest count. Ties go to whichever category comes first in
/// Positive, Negative, Mixed, Neutral order, so an empty document is Positive.
pub fn dominant_verdict(summary: &DocumentSummary) -> SentimentOutcome {
    let mut dominant = SentimentOutcome::Positive;

    for (outcome, count) in summary.iter() {
        if count > summary.count(dominant) {
            dominant = outcome;
        }
    }

    dominant
}

impl VerdictMode {
    pub fn verdict(&self, summary: &DocumentSummary) -> Verdict {
        match self {
            Self::Pairwise => Verdict::Pairwise(pairwise_verdict(summary)),
            Self::Dominant => Verdict::Dominant(dominant_verdict(summary)),
        }
    }
}
