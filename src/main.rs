mod commands;
mod config;
mod diagnostics;
mod error;
mod history;
mod normalize;
mod resolver;
mod scanner;
mod types;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "doctidy", about = "Maintenance checks for markdown documentation trees")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate that internal markdown links resolve to existing files
    Check,
    /// Append a timestamped entry to PROMPT_HISTORY.md
    Log {
        /// Paraphrased prompt text to record
        paraphrase: String,
        /// Short outcome note appended to the entry
        outcome: Option<String>,
    },
    /// Strip emoji and trailing whitespace from markdown files
    Normalize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check => commands::check(),
        Commands::Log { paraphrase, outcome } => {
            commands::log(&paraphrase, outcome.as_deref()).map(|()| ExitCode::SUCCESS)
        },
        Commands::Normalize => commands::normalize().map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    }
}
