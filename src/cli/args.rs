//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb init --config <path>
//! - rosterdb start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterdb - a minimal file-backed person record HTTP service
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file (defaults apply if the file is absent)
        #[arg(long, default_value = "./rosterdb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
