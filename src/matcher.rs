use rayon::prelude::*;

use crate::error::MatchError;
use crate::ngram::{jaccard_distance, ngrams};
use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub word: String,
    pub distance: f64,
}

/// Candidate pruning strategy, swappable without touching scoring or ranking.
pub trait CandidateFilter: Send + Sync {
    fn candidates<'v>(&self, input_word: &str, vocabulary: &'v Vocabulary) -> Vec<&'v str>;
}

/// Keeps only words sharing the input's first letter. Coarse pruning that
/// trades recall for speed; the globally best match may start differently.
pub struct FirstLetterFilter;

impl CandidateFilter for FirstLetterFilter {
    fn candidates<'v>(&self, input_word: &str, vocabulary: &'v Vocabulary) -> Vec<&'v str> {
        match input_word.chars().next() {
            Some(first) => vocabulary
                .iter()
                .filter(|word| word.chars().next() == Some(first))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// No pruning, the fallback when letter filtering comes up empty.
pub struct FullScanFilter;

impl CandidateFilter for FullScanFilter {
    fn candidates<'v>(&self, _input_word: &str, vocabulary: &'v Vocabulary) -> Vec<&'v str> {
        vocabulary.iter().collect()
    }
}

pub struct NearestMatcher {
    filter: Box<dyn CandidateFilter>,
}

impl Default for NearestMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl NearestMatcher {
    pub fn new() -> Self {
        Self::with_filter(Box::new(FirstLetterFilter))
    }

    pub fn with_filter(filter: Box<dyn CandidateFilter>) -> Self {
        NearestMatcher { filter }
    }

    /// Scored candidates, sorted ascending by distance, untruncated.
    /// The sort is stable, so equal distances keep vocabulary order.
    pub fn rank_candidates(
        &self,
        input_word: &str,
        n_grams: usize,
        vocabulary: &Vocabulary,
    ) -> Result<Vec<ScoredCandidate>, MatchError> {
        let input_word = input_word.to_lowercase();
        let candidates = self.filter.candidates(&input_word, vocabulary);
        if candidates.is_empty() {
            return Err(MatchError::EmptyCandidateSet { input_word });
        }
        log::debug!(
            "scoring {} of {} vocabulary words for '{}'",
            candidates.len(),
            vocabulary.len(),
            input_word
        );

        let input_ngrams = ngrams(&input_word, n_grams);
        let mut scored: Vec<ScoredCandidate> = candidates
            .par_iter()
            .map(|word| ScoredCandidate {
                word: (*word).to_owned(),
                distance: jaccard_distance(&input_ngrams, &ngrams(word, n_grams)),
            })
            .collect();
        scored.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(scored)
    }

    /// Nearest vocabulary words, most similar first. An exact match returns
    /// exactly that word regardless of `num_return_words`.
    pub fn find_nearest(
        &self,
        input_word: &str,
        n_grams: usize,
        vocabulary: &Vocabulary,
        num_return_words: usize,
    ) -> Result<Vec<String>, MatchError> {
        let input_word = input_word.to_lowercase();
        let mut ranked = self.rank_candidates(&input_word, n_grams, vocabulary)?;
        if ranked[0].word == input_word {
            ranked.truncate(1);
        } else {
            ranked.truncate(num_return_words);
        }
        Ok(ranked.into_iter().map(|candidate| candidate.word).collect())
    }
}
