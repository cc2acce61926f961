//! Batch Metadata Guessing Tool
//!
//! Guesses metadata for release names given as arguments, or streamed one
//! per line on stdin, and prints one JSON object per input line.

use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tsumugi_core::engine::Engine;
use tsumugi_core::guess::Guess;
use tsumugi_lang::LanguageRegistry;

/// CLI arguments
#[derive(Parser)]
#[command(name = "tsumugi-guess")]
#[command(about = "Guess structured metadata from media release names")]
#[command(version)]
struct Cli {
    /// Release names to guess; reads stdin line-by-line when empty
    names: Vec<String>,

    /// Disable language detection
    #[arg(long)]
    no_languages: bool,

    /// Also print per-property confidences
    #[arg(short, long)]
    confidence: bool,
}

#[derive(Serialize)]
struct GuessOutput {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    guess: Option<Guess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<Vec<(String, f32)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn run_one(engine: &Engine, input: &str, with_confidence: bool) -> GuessOutput {
    match engine.guess(input) {
        Ok(guess) => {
            let confidence = with_confidence.then(|| {
                guess
                    .iter()
                    .map(|(prop, _, c)| (prop.to_string(), c))
                    .collect()
            });
            GuessOutput {
                input: input.to_string(),
                guess: Some(guess),
                confidence,
                error: None,
            }
        }
        Err(e) => GuessOutput {
            input: input.to_string(),
            guess: None,
            confidence: None,
            error: Some(e.to_string()),
        },
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut engine = Engine::with_defaults()?;
    if !cli.no_languages {
        engine = engine.with_language_resolver(Box::new(LanguageRegistry::new()));
    }

    if cli.names.is_empty() {
        debug!("no arguments given, reading names from stdin");
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let output = run_one(&engine, line, cli.confidence);
            println!("{}", serde_json::to_string(&output)?);
        }
    } else {
        for name in &cli.names {
            let output = run_one(&engine, name, cli.confidence);
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_carries_guess_on_success() {
        let engine = Engine::with_defaults().unwrap();
        let output = run_one(&engine, "Breaking.Bad.S05E14.720p.HDTV.x264.mkv", true);

        assert!(output.guess.is_some());
        assert!(output.error.is_none());
        let confidence = output.confidence.unwrap();
        assert!(confidence.iter().any(|(prop, _)| prop == "season"));
    }

    #[test]
    fn output_carries_error_on_empty_input() {
        let engine = Engine::with_defaults().unwrap();
        let output = run_one(&engine, "", false);

        assert!(output.guess.is_none());
        assert!(output.error.is_some());
    }
}
