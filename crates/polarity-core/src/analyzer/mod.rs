//! Polarity analysis: cue tables, result types, and the analyzer itself.
//!
//! # Components
//!
//! - [`PolarityAnalyzer`]: the core algorithm (baseline + word-level
//!   adjustment + blend + classification)
//! - [`Polarity`]: the three-way classification label
//! - [`WordScore`]: per-word annotation behind each highlight entry
//! - [`AnalysisResult`]: label, final score, and ordered highlights

mod analyzer_impl;
mod cues;
mod result;

pub use analyzer_impl::PolarityAnalyzer;
pub use result::{AnalysisResult, Polarity, WordScore};
