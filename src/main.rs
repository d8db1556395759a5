//! CLI entry point for composing images into a 4x4 grid

use std::process::ExitCode;

use clap::Parser;
use gridcollage::io::cli::{Cli, CollageProcessor};
use gridcollage::io::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let mut processor = CollageProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
