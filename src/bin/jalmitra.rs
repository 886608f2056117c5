//! Jalmitra CLI binary.

use clap::Parser;
use jalmitra::cli::{args::*, commands::*};
use log::LevelFilter;
use std::process;

fn main() {
    let args = JalmitraArgs::parse();

    let level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
