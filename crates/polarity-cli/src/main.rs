//! Polarity CLI
//!
//! Command-line shell for the polarity scorer. The shell only collects text
//! and displays results; every scoring decision lives in `polarity-core`.
//!
//! # Commands
//!
//! - `analyze`: score a single piece of text and print the result
//! - `repl`: interactive line-by-line scoring session

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Polarity CLI - lexicon-based sentiment scoring
#[derive(Parser)]
#[command(name = "polarity-cli")]
#[command(version = "0.1.0")]
#[command(about = "Polarity scoring with negation and intensifier adjustment")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single piece of text
    Analyze(commands::analyze::AnalyzeArgs),
    /// Interactive scoring session (reads one line at a time from stdin)
    Repl(commands::repl::ReplArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Analyze(args) => commands::analyze::handle_analyze(args),
        Commands::Repl(args) => commands::repl::handle_repl(args),
    };

    std::process::exit(exit_code);
}
