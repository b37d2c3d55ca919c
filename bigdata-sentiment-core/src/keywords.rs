use {
    std::collections::BTreeMap,
    regex::Regex,
    crate::config::KeywordsConfig,
};

/// Immutable set of lowercase keywords of one polarity.
///
/// Every keyword is compiled once into a whole-word pattern, so counting a line is a
/// matter of running the prepared matchers against its lowercased text.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    matchers: BTreeMap<String, Regex>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matchers = BTreeMap::new();

        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || matchers.contains_key(&word) {
                continue;
            }

            let matcher = Regex::new(&format!(r"\b{}\b", regex::escape(&word)))?;
            matchers.insert(word, matcher);
        }

        Ok(Self { matchers })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.matchers.contains_key(&word.to_lowercase())
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.matchers.keys().map(String::as_str)
    }

    /// Counts non-overlapping whole-word occurrences of every keyword, summed over the set.
    /// `lowercased_line` must already be lowercased.
    pub fn count_in(&self, lowercased_line: &str) -> usize {
        self.matchers.values()
            .map(|matcher| matcher.find_iter(lowercased_line).count())
            .sum()
    }
}

/// Positive and negative keyword sets used for one run.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: KeywordSet,
    negative: KeywordSet,
}

impl Lexicon {
    pub fn new(positive: KeywordSet, negative: KeywordSet) -> Self {
        Self {
            positive,
            negative,
        }
    }

    pub fn from_words<P, N>(positive: P, negative: N) -> Result<Self, regex::Error>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Ok(Self::new(KeywordSet::new(positive)?, KeywordSet::new(negative)?))
    }

    pub fn positive(&self) -> &KeywordSet {
        &self.positive
    }

    pub fn negative(&self) -> &KeywordSet {
        &self.negative
    }
}

impl TryFrom<&KeywordsConfig> for Lexicon {
    type Error = regex::Error;

    fn try_from(config: &KeywordsConfig) -> Result<Self, Self::Error> {
        Self::from_words(&config.positive, &config.negative)
    }
}
