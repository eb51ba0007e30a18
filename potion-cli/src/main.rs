//! Potion Creation Station - interactive potion inventory
//!
//! CLI entry point: parses arguments, sets up logging and runs one menu
//! session over stdin/stdout.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use potion_cli::Session;
use potion_cli::cli::Cli;

fn setup_logging(verbose: bool) -> Result<()> {
    // Logs go to stderr so they never interleave with the menu on stdout
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("Failed to initialize logger")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let options = cli.menu_options();
    info!(
        "potion starting: sort_key={:?}, order={:?}, max_attribute={}",
        options.sort_key, options.display_order, options.max_attribute
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);
    session.run().context("Menu session failed")
}
