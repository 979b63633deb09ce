//! The polarity analyzer: baseline lookup, per-word adjustment, blend.

use tracing::{debug, trace};

use crate::config::AnalyzerConfig;
use crate::error::{PolarityError, PolarityResult};
use crate::lexicon::LexiconScorer;

use super::cues;
use super::result::{AnalysisResult, Polarity, WordScore};

/// Computes a polarity label, score, and word-level highlights for a text.
///
/// The analyzer blends two signals: the lexicon scorer's compound score for
/// the whole text, and the average of per-word scores adjusted for nearby
/// negation and intensifier cues.
///
/// # Algorithm
///
/// 1. Score the full, unmodified input once (the baseline).
/// 2. Split the input on whitespace, keeping original token positions.
/// 3. For each token: clean it (lower-case, strip everything that is not a
///    word character, whitespace, or hyphen), score it, and skip it if the
///    score is exactly zero. Otherwise scan the two preceding tokens for an
///    intensifier (the later match in scan order wins) and the three
///    preceding tokens for a negation cue (any match negates), then compute
///    `adjusted = base * modifier`, sign-flipped when negated.
/// 4. Blend: `0.5 * baseline + 0.5 * average(adjusted)`, or the baseline
///    alone when no word contributed.
/// 5. Classify against the ±0.05 thresholds.
///
/// The analyzer is a pure function of its input, the two static cue tables,
/// and the injected scorer: no interior state, no I/O, safe to share across
/// threads as long as the scorer is.
///
/// # Example
///
/// ```
/// use polarity_core::analyzer::{Polarity, PolarityAnalyzer};
/// use polarity_core::lexicon::CompoundLexicon;
///
/// let analyzer = PolarityAnalyzer::new(CompoundLexicon::default());
///
/// let result = analyzer.analyze("this movie was extremely good").unwrap();
/// assert_eq!(result.label, Polarity::Positive);
/// assert_eq!(result.highlights.len(), 1);
///
/// // Negation within the three-token lookback window flips the sign.
/// let result = analyzer.analyze("not good").unwrap();
/// assert_eq!(result.highlights, vec!["good(0.6->-0.6)".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct PolarityAnalyzer<S> {
    /// The injected lexicon scorer (one call per input, one per token).
    scorer: S,

    /// Blend weights, thresholds, and lookback windows.
    config: AnalyzerConfig,
}

impl<S: LexiconScorer> PolarityAnalyzer<S> {
    /// Create an analyzer with the default configuration.
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            config: AnalyzerConfig::default(),
        }
    }

    /// Create an analyzer with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PolarityError::Config`] if the configuration is invalid.
    pub fn with_config(scorer: S, config: AnalyzerConfig) -> PolarityResult<Self> {
        config.validate().map_err(PolarityError::Config)?;
        Ok(Self { scorer, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a piece of text.
    ///
    /// Tolerates any input, including empty or whitespace-only text (the
    /// result is then baseline-only with no highlights). The only error is a
    /// failing lexicon scorer, whose error is propagated unchanged.
    pub fn analyze(&self, text: &str) -> PolarityResult<AnalysisResult> {
        let baseline = self.scorer.score(text)?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        debug!(tokens = tokens.len(), baseline, "analyzing text");

        let mut sum = 0.0f32;
        let mut contributing = 0usize;
        let mut highlights = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let cleaned = clean_token(token);
            let base = self.scorer.score(&cleaned)?;
            if base == 0.0 {
                continue;
            }

            // Later matches overwrite earlier ones, so the cue nearer the
            // target word wins.
            let mut modifier = 1.0f32;
            let start = i.saturating_sub(self.config.intensifier_window);
            for prev in &tokens[start..i] {
                if let Some(m) = cues::intensifier_for(&prev.to_lowercase()) {
                    modifier = m;
                }
            }

            let start = i.saturating_sub(self.config.negation_window);
            let negated = tokens[start..i]
                .iter()
                .any(|prev| cues::is_negation_cue(&prev.to_lowercase()));

            let mut adjusted = base * modifier;
            if negated {
                adjusted *= -1.0;
            }

            sum += adjusted;
            contributing += 1;

            let word = WordScore {
                original_word: (*token).to_string(),
                base_score: base,
                modifier,
                negated,
                adjusted_score: adjusted,
            };
            trace!(%word, modifier, negated, "contributing word");
            highlights.push(word.to_string());
        }

        let score = if contributing > 0 {
            let average = sum / contributing as f32;
            self.config.baseline_weight * baseline
                + (1.0 - self.config.baseline_weight) * average
        } else {
            baseline
        };

        Ok(AnalysisResult {
            label: self.classify(score),
            score,
            highlights,
        })
    }

    /// Classify a final score against the configured thresholds.
    fn classify(&self, score: f32) -> Polarity {
        if score >= self.config.positive_threshold {
            Polarity::Positive
        } else if score <= self.config.negative_threshold {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Lower-case a token and strip every character that is not a word
/// character, whitespace, or hyphen.
fn clean_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect()
}
