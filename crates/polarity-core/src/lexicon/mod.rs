//! Lexicon scorer contract and the built-in compound lexicon.
//!
//! The analyzer does not own a sentiment dictionary; it consumes anything
//! implementing [`LexiconScorer`]. The contract mirrors a pre-trained
//! lexicon scorer: one deterministic compound value in `[-1, 1]` per piece
//! of text, zero (or near-zero) when nothing in the text is recognized.
//!
//! [`CompoundLexicon`] is a self-contained implementation backed by a signed
//! word-valence map, so the workspace binaries run without any external
//! lexicon provisioning. Embedders with a richer scorer implement the trait
//! and inject it instead.

mod compound;
mod default_words;

pub use compound::CompoundLexicon;

use crate::error::PolarityResult;

/// A source of compound polarity scores.
///
/// Implementations must be deterministic for a given text and lexicon
/// version, must tolerate arbitrary input (single words, multi-word text,
/// strings with no recognized terms), and must be safe for concurrent
/// read-only use. Loading or provisioning lexicon data belongs to
/// construction time, never to the scoring path.
///
/// The analyzer issues one call per full input text and one call per
/// cleaned token, and propagates any error unchanged to its caller.
pub trait LexiconScorer {
    /// Score `text`, returning a compound polarity in `[-1, 1]`.
    ///
    /// Text with no recognized terms scores `0.0` (or near-0).
    fn score(&self, text: &str) -> PolarityResult<f32>;
}

impl<S: LexiconScorer + ?Sized> LexiconScorer for &S {
    fn score(&self, text: &str) -> PolarityResult<f32> {
        (**self).score(text)
    }
}
