//! Analyzer configuration.
//!
//! The defaults reproduce the published algorithm exactly: a 50/50 blend of
//! the whole-text baseline with the per-word average, a symmetric ±0.05
//! classification dead zone, a two-token intensifier lookback, and a
//! three-token negation lookback.

use serde::{Deserialize, Serialize};

/// Configuration for [`PolarityAnalyzer`](crate::analyzer::PolarityAnalyzer).
///
/// # Example
///
/// ```
/// use polarity_core::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.negation_window, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Weight of the whole-text baseline score in the final blend.
    /// The per-word average receives `1.0 - baseline_weight`.
    /// Range: `[0.0, 1.0]`
    pub baseline_weight: f32,

    /// Final scores at or above this value classify as Positive.
    /// Range: `[0.0, 1.0]`
    pub positive_threshold: f32,

    /// Final scores at or below this value classify as Negative.
    /// Range: `[-1.0, 0.0]`
    pub negative_threshold: f32,

    /// How many preceding tokens are scanned for an intensifier cue.
    pub intensifier_window: usize,

    /// How many preceding tokens are scanned for a negation cue.
    pub negation_window: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            baseline_weight: 0.5,
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            intensifier_window: 2,
            negation_window: 3,
        }
    }
}

impl AnalyzerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.baseline_weight) {
            return Err(format!(
                "baseline_weight must be in [0, 1], got {}",
                self.baseline_weight
            ));
        }
        if !(0.0..=1.0).contains(&self.positive_threshold) {
            return Err(format!(
                "positive_threshold must be in [0, 1], got {}",
                self.positive_threshold
            ));
        }
        if !(-1.0..=0.0).contains(&self.negative_threshold) {
            return Err(format!(
                "negative_threshold must be in [-1, 0], got {}",
                self.negative_threshold
            ));
        }
        if self.intensifier_window == 0 {
            return Err("intensifier_window must be at least 1".to_string());
        }
        if self.negation_window == 0 {
            return Err("negation_window must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_matches_published_constants() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.baseline_weight, 0.5);
        assert_eq!(config.positive_threshold, 0.05);
        assert_eq!(config.negative_threshold, -0.05);
        assert_eq!(config.intensifier_window, 2);
        assert_eq!(config.negation_window, 3);
    }

    #[test]
    fn test_invalid_baseline_weight() {
        let config = AnalyzerConfig {
            baseline_weight: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("baseline_weight"));
    }

    #[test]
    fn test_invalid_positive_threshold() {
        let config = AnalyzerConfig {
            positive_threshold: -0.1,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("positive_threshold"));
    }

    #[test]
    fn test_invalid_negative_threshold() {
        let config = AnalyzerConfig {
            negative_threshold: 0.1,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("negative_threshold"));
    }

    #[test]
    fn test_zero_windows_rejected() {
        let config = AnalyzerConfig {
            intensifier_window: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnalyzerConfig {
            negation_window: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = AnalyzerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.positive_threshold, config.positive_threshold);
        assert_eq!(back.negation_window, config.negation_window);
    }
}
