//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

pub mod batch;
pub mod codecs;
pub mod params;
pub mod suggest;

use crate::cli::{Cli, Commands};
use crate::error::CliResult;

/// Dispatches the parsed command line to its subcommand.
pub fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Suggest(args) => suggest::run_suggest(args),
        Commands::Params(args) => params::run_params(args),
        Commands::Codecs(args) => codecs::run_codecs(args),
        Commands::Batch(args) => batch::run_batch(args),
    }
}
