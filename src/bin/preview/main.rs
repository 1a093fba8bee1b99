mod cli;
mod window;
mod workflow;

use clap::Parser;
use log::error;
use sprite_sheet_tools::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    match workflow::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
