//! Word-valence lexicon producing compound polarity scores.

use std::collections::HashMap;

use crate::error::PolarityResult;

use super::default_words::default_lexicon;
use super::LexiconScorer;

/// A compound-score lexicon backed by signed word valences.
///
/// Maps words (case-insensitively) to valences in `[-1, 1]`: positive values
/// for positive sentiment, negative for negative. Scoring averages the
/// valences of recognized words, so a single recognized word scores exactly
/// its valence and unrecognized text scores `0.0`.
///
/// The lexicon is deliberately naive: no negation, intensity, or context
/// handling of its own. Those adjustments are the
/// [`PolarityAnalyzer`](crate::analyzer::PolarityAnalyzer)'s job.
///
/// # Example
///
/// ```
/// use polarity_core::lexicon::{CompoundLexicon, LexiconScorer};
///
/// let lexicon = CompoundLexicon::default();
///
/// assert!(lexicon.score("wonderful").unwrap() > 0.0);
/// assert!(lexicon.score("terrible").unwrap() < 0.0);
/// assert_eq!(lexicon.score("qwertyuiop").unwrap(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct CompoundLexicon {
    /// Word → signed valence in `[-1, 1]`.
    words: HashMap<String, f32>,
}

impl CompoundLexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Insert a word with a signed valence, clamped to `[-1, 1]`.
    ///
    /// Words are stored lower-cased; re-inserting overwrites.
    pub fn insert(&mut self, word: &str, valence: f32) {
        self.words
            .insert(word.to_lowercase(), valence.clamp(-1.0, 1.0));
    }

    /// Insert a positive-sentiment word with the given intensity in `[0, 1]`.
    pub fn add_positive(&mut self, word: &str, intensity: f32) {
        self.insert(word, intensity.clamp(0.0, 1.0));
    }

    /// Insert a negative-sentiment word with the given intensity in `[0, 1]`
    /// (stored as a negative valence).
    pub fn add_negative(&mut self, word: &str, intensity: f32) {
        self.insert(word, -intensity.clamp(0.0, 1.0));
    }

    /// Get the valence for a word, or `None` if it is not in the lexicon.
    pub fn get(&self, word: &str) -> Option<f32> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check whether a word is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Merge another lexicon into this one.
    ///
    /// Existing words are overwritten by the other lexicon's valences.
    pub fn merge(&mut self, other: &CompoundLexicon) {
        for (word, valence) in &other.words {
            self.words.insert(word.clone(), *valence);
        }
    }
}

impl Default for CompoundLexicon {
    fn default() -> Self {
        default_lexicon()
    }
}

impl LexiconScorer for CompoundLexicon {
    /// Average the signed valences of recognized words, clamped to `[-1, 1]`.
    ///
    /// Tokenizes on non-alphabetic characters, matches case-insensitively,
    /// and returns `0.0` when nothing matches. Never fails.
    fn score(&self, text: &str) -> PolarityResult<f32> {
        let mut sum = 0.0f32;
        let mut matched = 0usize;

        for word in text.split(|c: char| !c.is_alphabetic()) {
            if word.is_empty() {
                continue;
            }
            if let Some(&valence) = self.words.get(&word.to_lowercase()) {
                sum += valence;
                matched += 1;
            }
        }

        if matched == 0 {
            return Ok(0.0);
        }
        Ok((sum / matched as f32).clamp(-1.0, 1.0))
    }
}
