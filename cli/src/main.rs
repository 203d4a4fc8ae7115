mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{enumerate, limits};
use flexi_logger::Logger;
use log::LevelFilter;

/// Map the `-v` count onto a log level for the library's diagnostics.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    let _logger = Logger::with(log_level(cli.verbose)).log_to_stderr().start()?;

    match &cli.command {
        Commands::Limits(args) => limits::run(&cli, args),
        Commands::Enumerate(args) => enumerate::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
