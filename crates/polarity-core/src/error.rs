//! Polarity error types.
//!
//! The scoring core itself has no failure modes: every input, including empty
//! or punctuation-only text, produces a well-formed result. The error type
//! exists for the two seams where failure is possible — a lexicon scorer that
//! cannot service a lookup, and an invalid analyzer configuration.

use thiserror::Error;

/// Errors that can occur around polarity analysis.
#[derive(Debug, Error)]
pub enum PolarityError {
    /// The lexicon scorer failed to produce a compound score.
    ///
    /// Raised by [`LexiconScorer`](crate::lexicon::LexiconScorer)
    /// implementations (e.g. a lexicon that was never provisioned) and
    /// propagated unchanged through `analyze`.
    #[error("Lexicon scorer error: {0}")]
    Lexicon(String),

    /// Invalid analyzer configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for polarity operations.
pub type PolarityResult<T> = Result<T, PolarityError>;
