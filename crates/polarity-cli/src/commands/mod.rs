//! CLI command handlers.
//!
//! Handlers return process exit codes: 0 on success, 1 on error.

pub mod analyze;
pub mod repl;

use polarity_core::AnalysisResult;

/// Print a result in the human-readable format shared by both commands.
pub(crate) fn print_result(result: &AnalysisResult) {
    println!("Sentiment: {}", result.label);
    println!("Polarity: {}", result.score);
    if !result.highlights.is_empty() {
        println!("Key Words:");
        for highlight in &result.highlights {
            println!("  • {}", highlight);
        }
    }
}
