//! Analysis result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Polarity classification of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Final score at or above the positive threshold.
    Positive,
    /// Final score at or below the negative threshold.
    Negative,
    /// Final score inside the dead zone between the thresholds.
    Neutral,
}

impl Polarity {
    /// The label as a display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Negative => "Negative",
            Polarity::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-word annotation produced for each token with a non-zero base score.
///
/// Ephemeral: created during the adjustment pass, formatted into a highlight
/// string, and discarded. The surface form keeps the token exactly as it
/// appeared in the input (original case and punctuation).
#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    /// The token's original surface form.
    pub original_word: String,

    /// The token's own compound score from the lexicon scorer.
    pub base_score: f32,

    /// The intensifier multiplier applied (1.0 when no cue matched).
    pub modifier: f32,

    /// Whether a negation cue was found in the lookback window.
    pub negated: bool,

    /// `base_score * modifier`, sign-flipped when negated.
    pub adjusted_score: f32,
}

impl fmt::Display for WordScore {
    /// Format as the highlight entry `"word(base->adjusted)"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}->{})",
            self.original_word, self.base_score, self.adjusted_score
        )
    }
}

/// The outcome of one `analyze` call.
///
/// Owned exclusively by the caller; the analyzer keeps no per-call state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Polarity classification of the final score.
    pub label: Polarity,

    /// The blended final score. Not guaranteed to stay in `[-1, 1]`:
    /// intensifier amplification can push the word-level average beyond the
    /// lexicon's native range.
    pub score: f32,

    /// Formatted annotations for each contributing word, in left-to-right
    /// order of occurrence.
    pub highlights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_display() {
        assert_eq!(Polarity::Positive.to_string(), "Positive");
        assert_eq!(Polarity::Negative.to_string(), "Negative");
        assert_eq!(Polarity::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_word_score_highlight_format() {
        let word = WordScore {
            original_word: "Good!".to_string(),
            base_score: 0.5,
            modifier: 2.0,
            negated: false,
            adjusted_score: 1.0,
        };
        assert_eq!(word.to_string(), "Good!(0.5->1)");
    }

    #[test]
    fn test_word_score_preserves_surface_form() {
        let word = WordScore {
            original_word: "GREAT,".to_string(),
            base_score: 0.75,
            modifier: 1.0,
            negated: true,
            adjusted_score: -0.75,
        };
        let highlight = word.to_string();
        assert!(highlight.starts_with("GREAT,("));
        assert!(highlight.contains("->-0.75"));
    }

    #[test]
    fn test_result_serializes() {
        let result = AnalysisResult {
            label: Polarity::Neutral,
            score: 0.0,
            highlights: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"Neutral\""));

        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
