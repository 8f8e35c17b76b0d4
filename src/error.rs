use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    /// Candidate filtering removed every vocabulary word. Recoverable: callers
    /// can retry with `FullScanFilter` or report "no suggestions".
    #[error("no vocabulary candidates for '{input_word}'")]
    EmptyCandidateSet { input_word: String },
}
