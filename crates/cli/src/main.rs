use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::{Cli, Command};
use dirview_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::List(args) => commands::list::run(args),
        Command::Stats(args) => commands::stats::run(args),
    }
}
