//! yoga CLI
//!
//! Inspects how a yoga project's configuration resolves.

mod cli;
mod commands;
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, ConfigAction};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    let dir = project_dir(cli.dir)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Resolve { json } => runtime.block_on(commands::run_resolve(&dir, json)),
            ConfigAction::Check => runtime.block_on(commands::run_check(&dir)),
            ConfigAction::Paths => commands::run_paths(&dir),
        },
    }
}

fn project_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(CliError::user(format!("Not a directory: {}", dir.display())));
    }
    Ok(dir)
}
