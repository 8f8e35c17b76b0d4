//! nearwords - nearest-word suggestions over a fixed vocabulary.
//!
//! Words are compared by Jaccard distance over their letter n-gram sets and
//! ranked most-similar first, with optional dictionary-meaning enrichment.

pub mod error;
pub mod lookup;
pub mod matcher;
pub mod ngram;
pub mod orchestrator;
pub mod vocabulary;

pub use error::MatchError;
pub use lookup::{DictApiClient, GlossEntry, Meaning, MeaningEntry, MeaningLookup};
pub use matcher::{
    CandidateFilter, FirstLetterFilter, FullScanFilter, NearestMatcher, ScoredCandidate,
};
pub use orchestrator::{
    MAX_RETURN_WORDS, MAX_WORD_LEN, QueryOrchestrator, QueryOutcome, QueryResult,
};
pub use vocabulary::Vocabulary;
