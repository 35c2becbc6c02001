// bitscale-cli/src/main.rs
//
// Entry point for the bitscale command-line tool.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up logging.
// - Dispatching to the subcommand implementations.
// - Managing process exit codes based on success or failure.

use bitscale_cli::{Cli, logging, run};
use clap::Parser;
use log::debug;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!("Parsed arguments: {cli:?}");

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
