mod cli;
mod config;
mod convert;
mod logging;
mod points;
mod search_cmd;
mod stringify_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Search(args) => search_cmd::run(args),
        Command::Stringify(args) => stringify_cmd::run(args),
    }
}
