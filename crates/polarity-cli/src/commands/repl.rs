//! Interactive scoring loop.
//!
//! Reads one line at a time from stdin. Case-insensitive `exit`, `quit`, or
//! `q` ends the session, empty lines are skipped without calling the core,
//! and end-of-input terminates cleanly.

use std::io::{self, BufRead, Write};

use clap::Args;
use tracing::error;

use polarity_core::{CompoundLexicon, PolarityAnalyzer};

use super::print_result;

/// Arguments for the repl command.
#[derive(Args)]
pub struct ReplArgs {
    /// Print each result as a JSON line instead of human-readable
    #[arg(long)]
    pub json: bool,
}

/// Handle the repl command.
pub fn handle_repl(args: ReplArgs) -> i32 {
    let analyzer = PolarityAnalyzer::new(CompoundLexicon::default());

    println!("{}", "=".repeat(50));
    println!(" Polarity Analyzer");
    println!(" type 'exit' to quit");
    println!("{}", "=".repeat(50));

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("-> ");
        if io::stdout().flush().is_err() {
            return 1;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                error!("failed to read input: {}", e);
                eprintln!("Error: {}", e);
                return 1;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "q") {
            println!("Goodbye!");
            break;
        }

        match analyzer.analyze(input) {
            Ok(result) => {
                if args.json {
                    println!("{}", serde_json::to_string(&result).unwrap_or_default());
                } else {
                    println!("\n--- Result ---");
                    print_result(&result);
                    println!();
                }
            }
            Err(e) => {
                error!("analysis failed: {}", e);
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }

    0
}
