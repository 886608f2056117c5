//! Command line argument parsing for the Jalmitra CLI using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::knowledge::Language;

/// Jalmitra - bilingual FAQ assistant for water-resources services
#[derive(Parser, Debug, Clone)]
#[command(name = "jalmitra")]
#[command(about = "A bilingual (English/Hindi) FAQ assistant for water-resources department services")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JalmitraArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Path of the persisted model bundle
    #[arg(long, value_name = "MODEL_PATH", default_value = "jalmitra_model.bin")]
    pub model_path: PathBuf,

    /// Endpoint serving the supplementary knowledge mapping
    #[arg(long, value_name = "URL", env = "JALMITRA_ENRICHMENT_ENDPOINT")]
    pub enrichment_endpoint: Option<String>,

    /// Enrichment fetch timeout in seconds
    #[arg(long, default_value = "10")]
    pub enrichment_timeout_secs: u64,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl JalmitraArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the engine configuration from global arguments.
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default()
            .with_model_path(self.model_path.clone())
            .with_enrichment_timeout(Duration::from_secs(self.enrichment_timeout_secs));
        if let Some(endpoint) = &self.enrichment_endpoint {
            config = config.with_enrichment_endpoint(endpoint.clone());
        }
        config
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Ask a single question
    Ask(AskArgs),

    /// Interactive question/answer session
    Chat(ChatArgs),

    /// Rebuild the knowledge base and refit the model
    Train(TrainArgs),

    /// Show model statistics
    Stats(StatsArgs),
}

/// Arguments for asking a single question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The question text
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Response language
    #[arg(short, long, default_value = "auto")]
    pub language: LanguageChoice,
}

/// Arguments for the interactive session
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Response language
    #[arg(short, long, default_value = "auto")]
    pub language: LanguageChoice,
}

/// Arguments for retraining
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Rebuild even if a persisted model exists
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {}

/// Language selection for CLI commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageChoice {
    /// English responses
    English,
    /// Hindi responses
    Hindi,
    /// Detect from the message's script
    Auto,
}

impl LanguageChoice {
    /// Resolve to a concrete language, if fixed.
    pub fn fixed(self) -> Option<Language> {
        match self {
            LanguageChoice::English => Some(Language::English),
            LanguageChoice::Hindi => Some(Language::Hindi),
            LanguageChoice::Auto => None,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
