//! CLI module for rosterdb
//!
//! - init: write a default config file
//! - start: load the snapshot and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, start, Config};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the matching command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}
