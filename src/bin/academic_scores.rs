//! Academic Scores CLI
//!
//! Thin command-line wrapper around the calculators. Arguments are parsed as
//! JSON and passed through the untyped entry points, so shape errors are
//! reported by the calculators rather than by the argument parser.
//!
//! Usage:
//!   academic-scores grade '[{"score":80,"weight":0.4},{"score":90,"weight":0.6}]'
//!   academic-scores percentile 50 '[10,20,30,40,50]'
//!   academic-scores run request.json

use academic_scores::{
    calc_weighted_grade_value, percentile_value, ErrorKind, ScoreError, ScoreRequest,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "academic-scores", about = "Weighted grade and nearest-rank percentile calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Weighted grade of a JSON array of {score, weight} records
    Grade {
        /// e.g. '[{"score":80,"weight":0.4},{"score":90,"weight":0.6}]'
        items: String,
    },
    /// Nearest-rank percentile of a JSON array of numbers
    Percentile {
        /// Percentile rank (0-100)
        #[arg(allow_hyphen_values = true)]
        p: String,
        /// e.g. '[10,20,30]'
        values: String,
    },
    /// Evaluate a score request document
    Run {
        /// Path to a JSON request file
        file: PathBuf,
    },
}

/// Parse an argument as JSON, falling back to a JSON string for bare tokens
fn json_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn execute(command: &Command) -> Result<f64> {
    let result = match command {
        Command::Grade { items } => calc_weighted_grade_value(&json_arg(items))?,
        Command::Percentile { p, values } => percentile_value(&json_arg(p), &json_arg(values))?,
        Command::Run { file } => {
            let request = ScoreRequest::load(file)?;
            tracing::info!("Evaluating {} request from {:?}", request.kind(), file);
            request.evaluate()?
        }
    };
    Ok(result)
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ScoreError>().map(ScoreError::kind) {
        Some(ErrorKind::InvalidArgument) => 2,
        Some(ErrorKind::OutOfRange) => 3,
        None => 1,
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "academic_scores=info,warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(&cli.command) {
        Ok(result) => {
            println!("{result:.2}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
