pub mod args;

pub use args::{Cli, Commands, OutputFormat};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{self, Read};
use std::path::PathBuf;
use tokio::fs;

use crate::config::CorrectionConfig;
use crate::core::samples::sample_code;
use crate::core::types::{DiagnosticResult, Language};
use crate::correction::CorrectionRequester;
use crate::engine;

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("snippet_lab={}", log_level))
        .init();

    match cli.command {
        Commands::Run {
            file,
            language,
            correct,
            format,
        } => {
            run_snippet(file, language, correct, format).await?;
        }

        Commands::Sample { language } => {
            print!("{}", sample_code(language));
        }

        Commands::Languages => {
            for language in Language::ALL {
                println!("{language}");
            }
        }
    }

    Ok(())
}

async fn run_snippet(
    file: Option<PathBuf>,
    language: Language,
    correct: bool,
    format: OutputFormat,
) -> Result<()> {
    let source = read_source(file).await?;
    let result = engine::evaluate(&source, language);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_result(&result),
    }

    if correct {
        if let DiagnosticResult::Error(message) = &result {
            let requester = CorrectionRequester::gemini(CorrectionConfig::load_or_default())
                .context("failed to construct correction client")?;
            let correction = requester.request(language, &source, message).await;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&correction)?)
                }
                OutputFormat::Text => {
                    println!();
                    println!("{}", "Suggested fix:".bold());
                    println!("{}", correction.corrected_code);
                    println!();
                    println!("{}", correction.explanation.italic());
                }
            }
        }
    }

    Ok(())
}

async fn read_source(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn print_result(result: &DiagnosticResult) {
    match result {
        DiagnosticResult::Success(message) => println!("{}", message.green()),
        DiagnosticResult::Error(message) => eprintln!("{}", message.red()),
    }
}
