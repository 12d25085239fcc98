use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::types::Language;

/// Main CLI structure for snippetlab - simulated diagnostics for code snippets.
///
/// snippetlab evaluates a snippet against per-language diagnostic rules and
/// optionally asks the correction service for a fixed version when the
/// diagnostic is an error.
///
/// # Examples
///
/// ```bash
/// # Evaluate a file
/// snippetlab run hello.py --language python
///
/// # Evaluate stdin and ask for an AI fix on error
/// echo 'print "hi"' | snippetlab run --language python --correct
///
/// # Print the starter snippet for a language
/// snippetlab sample cpp
/// ```
#[derive(Parser)]
#[command(name = "snippetlab")]
#[command(about = "Simulated compiler diagnostics and AI code correction for code snippets")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a snippet and print the simulated diagnostic
    Run {
        /// Source file (default: stdin)
        file: Option<PathBuf>,

        /// Snippet language
        #[arg(short, long, value_enum)]
        language: Language,

        /// Request an AI correction when the diagnostic is an error
        #[arg(long)]
        correct: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the starter snippet for a language
    Sample {
        /// Snippet language
        #[arg(value_enum)]
        language: Language,
    },

    /// List supported languages
    Languages,
}

/// Output format for diagnostics and corrections
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// Machine-readable JSON
    Json,
}
