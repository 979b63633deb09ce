//! Static negation and intensifier cue tables.
//!
//! Both tables are English-specific, process-wide, and never mutated at
//! runtime. Callers pass lower-cased tokens; the tables store lower-cased
//! entries only.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Negation cue words and contractions.
///
/// Any of these within the lookback window flips the sign of a
/// sentiment-bearing word.
const NEGATION_CUES: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "nowhere", "neither", "nor", "cannot",
    "can't", "ain't", "isn't", "aren't", "wasn't", "weren't", "won't", "wouldn't", "shouldn't",
    "couldn't", "don't", "doesn't", "didn't", "without", "lacking", "against", "hardly",
    "scarcely", "barely", "seldom",
];

static INTENSIFIERS: OnceLock<HashMap<&'static str, f32>> = OnceLock::new();

/// Intensifier cue → strictly positive magnitude multiplier.
///
/// Values above 1.0 amplify, values below 1.0 dampen. The sign of the target
/// word's score is never affected.
fn intensifiers() -> &'static HashMap<&'static str, f32> {
    INTENSIFIERS.get_or_init(|| {
        HashMap::from([
            ("extremely", 2.0),
            ("incredibly", 1.9),
            ("absolutely", 1.8),
            ("astonishingly", 2.1),
            ("exceptionally", 1.95),
            ("unbelievably", 2.2),
            ("very", 1.5),
            ("really", 1.3),
            ("totally", 1.6),
            ("completely", 1.7),
            ("remarkably", 1.7),
            ("particularly", 1.4),
            ("especially", 1.4),
            ("slightly", 0.6),
            ("somewhat", 0.7),
            ("moderately", 0.75),
            // Multi-word cue; whitespace tokenization never produces it.
            ("a bit", 0.8),
        ])
    })
}

/// Check whether a lower-cased token is a negation cue.
pub(crate) fn is_negation_cue(word: &str) -> bool {
    NEGATION_CUES.contains(&word)
}

/// Look up the multiplier for a lower-cased intensifier cue.
pub(crate) fn intensifier_for(word: &str) -> Option<f32> {
    intensifiers().get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_cues_present() {
        for cue in ["not", "never", "won't", "without", "hardly"] {
            assert!(is_negation_cue(cue), "missing negation cue: {}", cue);
        }
    }

    #[test]
    fn test_non_cues_rejected() {
        assert!(!is_negation_cue("good"));
        assert!(!is_negation_cue("notably"));
        // Matching is on lower-cased tokens only.
        assert!(!is_negation_cue("NOT"));
    }

    #[test]
    fn test_intensifier_values() {
        assert_eq!(intensifier_for("extremely"), Some(2.0));
        assert_eq!(intensifier_for("unbelievably"), Some(2.2));
        assert_eq!(intensifier_for("very"), Some(1.5));
        assert_eq!(intensifier_for("slightly"), Some(0.6));
        assert_eq!(intensifier_for("good"), None);
    }

    #[test]
    fn test_all_multipliers_strictly_positive() {
        for (cue, multiplier) in intensifiers() {
            assert!(*multiplier > 0.0, "non-positive multiplier for {}", cue);
        }
    }

    #[test]
    fn test_no_overlap_between_tables() {
        for cue in NEGATION_CUES {
            assert!(intensifier_for(cue).is_none(), "{} is in both tables", cue);
        }
    }
}
