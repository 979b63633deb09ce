//! Lexicon-based polarity scoring with negation and intensifier adjustment.
//!
//! Computes a positive/negative/neutral label for a short piece of free text
//! by blending two signals: a whole-text compound score from a lexicon
//! scorer, and a per-word pass that flips the sign of sentiment-bearing
//! words preceded by negation cues and scales their magnitude by nearby
//! degree modifiers ("extremely", "slightly", ...).
//!
//! The blend is `0.5 * baseline + 0.5 * average(adjusted word scores)`, and
//! the label comes from fixed ±0.05 thresholds around zero.
//!
//! # Modules
//!
//! - [`analyzer`]: the adjustment algorithm, cue tables, and result types
//! - [`lexicon`]: the [`LexiconScorer`] contract plus the built-in
//!   [`CompoundLexicon`]
//! - [`config`]: analyzer configuration with the published constants as
//!   defaults
//! - [`error`]: error types and result alias
//!
//! # Example
//!
//! ```
//! use polarity_core::{CompoundLexicon, Polarity, PolarityAnalyzer};
//!
//! let analyzer = PolarityAnalyzer::new(CompoundLexicon::default());
//!
//! let result = analyzer.analyze("an extremely good day").unwrap();
//! assert_eq!(result.label, Polarity::Positive);
//!
//! let result = analyzer.analyze("").unwrap();
//! assert_eq!(result.label, Polarity::Neutral);
//! assert!(result.highlights.is_empty());
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod lexicon;

// Re-export commonly used types
pub use analyzer::{AnalysisResult, Polarity, PolarityAnalyzer, WordScore};
pub use config::AnalyzerConfig;
pub use error::{PolarityError, PolarityResult};
pub use lexicon::{CompoundLexicon, LexiconScorer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_exports_exist() {
        let _config = AnalyzerConfig::default();
        let _lexicon = CompoundLexicon::default();
        let _label = Polarity::Neutral;
    }

    #[test]
    fn test_analyzer_from_re_exports() {
        let analyzer = PolarityAnalyzer::new(CompoundLexicon::default());
        let result = analyzer.analyze("a wonderful surprise").unwrap();
        assert_eq!(result.label, Polarity::Positive);
    }
}
