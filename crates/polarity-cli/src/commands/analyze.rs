//! One-shot analyze command.

use clap::Args;
use tracing::{error, info};

use polarity_core::{CompoundLexicon, PolarityAnalyzer};

use super::print_result;

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// The text to score
    pub text: String,

    /// Output as JSON instead of human-readable
    #[arg(long)]
    pub json: bool,
}

/// Handle the analyze command.
///
/// Rejects empty input before it reaches the core (shell-side validation;
/// the core itself tolerates empty text).
pub fn handle_analyze(args: AnalyzeArgs) -> i32 {
    if args.text.trim().is_empty() {
        eprintln!("Error: please enter some text");
        return 1;
    }

    let analyzer = PolarityAnalyzer::new(CompoundLexicon::default());
    match analyzer.analyze(&args.text) {
        Ok(result) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).unwrap_or_default()
                );
            } else {
                print_result(&result);
            }
            info!(label = %result.label, score = result.score, "analysis complete");
            0
        }
        Err(e) => {
            error!("analysis failed: {}", e);
            eprintln!("Error: {}", e);
            1
        }
    }
}
