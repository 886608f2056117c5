//! Command implementations for the Jalmitra CLI.

use std::io::{self, BufRead, Write};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::ChatEngine;
use crate::error::{JalmitraError, Result};
use crate::knowledge::Language;

/// Execute a CLI command.
pub fn execute_command(args: JalmitraArgs) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask(ask_args.clone(), &args),
        Command::Chat(chat_args) => chat(chat_args.clone(), &args),
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Stats(_) => show_stats(&args),
    }
}

/// Build and initialize an engine from the global arguments.
fn initialized_engine(cli_args: &JalmitraArgs) -> Result<ChatEngine> {
    let engine = ChatEngine::new(cli_args.engine_config());
    engine.initialize()?;
    Ok(engine)
}

/// Answer a single question.
fn ask(args: AskArgs, cli_args: &JalmitraArgs) -> Result<()> {
    let engine = initialized_engine(cli_args)?;
    let language = resolve_language(&engine, args.language, &args.message);
    let response = engine.get_response(&args.message, language);

    output_response(&args.message, &response, language, cli_args)
}

/// Run an interactive question/answer session on stdin.
fn chat(args: ChatArgs, cli_args: &JalmitraArgs) -> Result<()> {
    let engine = initialized_engine(cli_args)?;

    if cli_args.verbosity() > 0 {
        println!("Jalmitra assistant. Empty line or Ctrl-D exits.");
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            break;
        }

        let language = resolve_language(&engine, args.language, message);
        let response = engine.get_response(message, language);
        println!("{response}");
        println!();
    }

    Ok(())
}

/// Rebuild the knowledge base and refit the model.
///
/// Without `--force` an existing valid bundle is loaded instead of refit.
fn train(args: TrainArgs, cli_args: &JalmitraArgs) -> Result<()> {
    let engine = ChatEngine::new(cli_args.engine_config());

    if args.force {
        engine.retrain()?;
    } else {
        engine.initialize()?;
    }

    let stats = engine
        .stats()
        .ok_or_else(|| JalmitraError::other("training produced no model"))?;
    output_stats("Model ready", &stats, cli_args)
}

/// Show statistics for the current model.
fn show_stats(cli_args: &JalmitraArgs) -> Result<()> {
    let engine = initialized_engine(cli_args)?;
    let stats = engine
        .stats()
        .ok_or_else(|| JalmitraError::other("no model available"))?;
    output_stats("Model statistics", &stats, cli_args)
}

/// Resolve the requested language, detecting from the message for `auto`.
fn resolve_language(engine: &ChatEngine, choice: LanguageChoice, message: &str) -> Language {
    choice
        .fixed()
        .unwrap_or_else(|| engine.detect_language(message))
}
