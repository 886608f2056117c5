//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{JalmitraArgs, OutputFormat};
use crate::engine::ModelStats;
use crate::error::Result;
use crate::knowledge::Language;

/// A single question/answer exchange.
#[derive(Debug, Serialize)]
pub struct ResponsePayload<'a> {
    pub message: &'a str,
    pub response: &'a str,
    pub language: &'a str,
}

/// Model statistics with a headline.
#[derive(Debug, Serialize)]
pub struct StatsPayload<'a> {
    pub status: &'a str,
    #[serde(flatten)]
    pub stats: &'a ModelStats,
}

/// Print a single response in the requested format.
pub fn output_response(
    message: &str,
    response: &str,
    language: Language,
    args: &JalmitraArgs,
) -> Result<()> {
    let language_name = match language {
        Language::English => "english",
        Language::Hindi => "hindi",
    };
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("Question: {message}");
                println!("Language: {language_name}");
            }
            println!("{response}");
        }
        OutputFormat::Json => {
            let payload = ResponsePayload {
                message,
                response,
                language: language_name,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}

/// Print model statistics in the requested format.
pub fn output_stats(status: &str, stats: &ModelStats, args: &JalmitraArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{status}");
            println!("  Vocabulary size: {}", stats.vocabulary_size);
            println!("  Question variants: {}", stats.variant_count);
            println!("  Categories: {}", stats.category_count);
            println!("  Trained at: {}", stats.trained_at);
        }
        OutputFormat::Json => {
            let payload = StatsPayload { status, stats };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }
    Ok(())
}
