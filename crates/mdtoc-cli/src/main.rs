//! mdtoc CLI - table-of-contents extraction for markdown/MDX documents
//!
//! This is the main entry point for the mdtoc command-line interface.
//! Command implementations live in separate modules; this file only wires
//! argument parsing, logging, and dispatch together.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    output::configure_color();

    match &cli.command {
        Command::Headings(args) => commands::headings(args),
        Command::Toc(args) => commands::toc(args),
    }
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose || cli.debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
