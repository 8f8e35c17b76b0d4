use crate::error::MatchError;
use crate::lookup::{Meaning, MeaningEntry, MeaningLookup};
use crate::matcher::NearestMatcher;
use crate::vocabulary::Vocabulary;

pub const MAX_WORD_LEN: usize = 45;
pub const MAX_RETURN_WORDS: usize = 3;

/// Length classification plus, where matching ran, the ranked word list.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Empty,
    TooShort,
    TooLong,
    Matched(Vec<String>),
}

/// `QueryOutcome` enriched with dictionary meanings.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Empty,
    TooShort,
    TooLong,
    ExactMatch(MeaningEntry),
    Suggestions(Vec<MeaningEntry>),
}

pub struct QueryOrchestrator<'v> {
    vocabulary: &'v Vocabulary,
    matcher: NearestMatcher,
    num_return_words: usize,
}

impl<'v> QueryOrchestrator<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self::with_matcher(vocabulary, NearestMatcher::new())
    }

    pub fn with_matcher(vocabulary: &'v Vocabulary, matcher: NearestMatcher) -> Self {
        QueryOrchestrator {
            vocabulary,
            matcher,
            num_return_words: MAX_RETURN_WORDS,
        }
    }

    /// Length policy and n-gram size selection. Short words get bigrams,
    /// everything else trigrams. No I/O.
    pub fn classify_and_match(&self, raw_input: &str) -> Result<QueryOutcome, MatchError> {
        let input = raw_input.trim();
        let length = input.chars().count();
        let n_grams = match length {
            0 => return Ok(QueryOutcome::Empty),
            1 => return Ok(QueryOutcome::TooShort),
            2..=3 => 2,
            4..=MAX_WORD_LEN => 3,
            _ => return Ok(QueryOutcome::TooLong),
        };
        let words =
            self.matcher
                .find_nearest(input, n_grams, self.vocabulary, self.num_return_words)?;
        Ok(QueryOutcome::Matched(words))
    }

    /// Full pipeline: classification, matching, then meaning enrichment.
    /// Words the gateway cannot resolve come back as `Meaning::NotFound`.
    pub fn query(
        &self,
        raw_input: &str,
        lookup: &dyn MeaningLookup,
    ) -> Result<QueryResult, MatchError> {
        let words = match self.classify_and_match(raw_input)? {
            QueryOutcome::Empty => return Ok(QueryResult::Empty),
            QueryOutcome::TooShort => return Ok(QueryResult::TooShort),
            QueryOutcome::TooLong => return Ok(QueryResult::TooLong),
            QueryOutcome::Matched(words) => words,
        };

        let mut meanings = lookup.lookup_meanings(&words);
        let mut entries: Vec<MeaningEntry> = words
            .iter()
            .map(|word| MeaningEntry {
                word: word.clone(),
                meaning: meanings.remove(word).unwrap_or(Meaning::NotFound),
            })
            .collect();

        let input_word = raw_input.trim().to_lowercase();
        if entries.len() == 1 && entries[0].word == input_word {
            Ok(QueryResult::ExactMatch(entries.remove(0)))
        } else {
            Ok(QueryResult::Suggestions(entries))
        }
    }
}
