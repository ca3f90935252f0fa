//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// yoga - Resolve and inspect yoga project configuration
#[derive(Parser, Debug)]
#[command(name = "yoga")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in <DIR>
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Work with the project configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the fully resolved configuration
    ///
    /// Examples:
    ///   yoga config resolve           # Human-readable summary
    ///   yoga config resolve --json    # For scripting
    Resolve {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve the configuration and report whether it is valid
    Check,

    /// Show the project layout and which config file is used
    Paths,
}
