//! skein - a minimal CommonJS bundler.
//!
//! The binary handles argument parsing, logging initialization, and command
//! dispatch; everything else lives in the library crates.

use clap::Parser;
use miette::Result;
use skein_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Bundle(bundle_args) => commands::bundle_execute(bundle_args),
        cli::Command::Graph(graph_args) => commands::graph_execute(graph_args),
    };

    result.map_err(error::cli_error_to_miette)
}
