use bigdata_sentiment_core::{
    aggregator::{aggregate, DocumentSummary},
    classifier::{classify, SentimentOutcome},
    config::KeywordsConfig,
    keywords::{KeywordSet, Lexicon},
    verdict::{pairwise_verdict, PairwiseVerdict, VerdictMode},
};

fn default_lexicon() -> Lexicon {
    Lexicon::try_from(&KeywordsConfig::default()).unwrap()
}

#[test]
fn one_of_each_category_is_tied() {
    let lines = ["I am happy and excited", "I feel sad", "happy but angry", "the sky is blue"];

    let summary = aggregate(lines, &default_lexicon());

    assert_eq!(summary.positive(), 1);
    assert_eq!(summary.negative(), 1);
    assert_eq!(summary.mixed(), 1);
    assert_eq!(summary.neutral(), 1);
    assert_eq!(pairwise_verdict(&summary), PairwiseVerdict::Tied);
}

#[test]
fn all_positive_lines_are_happier() {
    let summary = aggregate(["I love this", "I love this too"], &default_lexicon());

    assert_eq!(summary.positive(), 2);
    assert_eq!(summary.total(), 2);
    assert_eq!(VerdictMode::Pairwise.verdict(&summary).to_string(), "Happier");
}

#[test]
fn missing_input_yields_empty_summary() {
    let summary = aggregate(std::iter::empty::<&str>(), &default_lexicon());

    assert_eq!(summary, DocumentSummary::default());
    assert_eq!(pairwise_verdict(&summary), PairwiseVerdict::Tied);
}

#[test]
fn standalone_functions_accept_arbitrary_sets() {
    let positive = KeywordSet::new(["sunny"]).unwrap();
    let negative = KeywordSet::new(["rainy"]).unwrap();

    assert_eq!(classify("Sunny, then RAINY.", &positive, &negative), SentimentOutcome::Mixed);
    assert_eq!(classify("unsunny weather", &positive, &negative), SentimentOutcome::Neutral);
}

#[test]
fn lexicon_can_be_shared_across_threads() {
    let lexicon = std::sync::Arc::new(default_lexicon());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let lexicon = lexicon.clone();
            std::thread::spawn(move || aggregate(["love", "sad", "meh"], &lexicon))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().total(), 3);
    }
}
