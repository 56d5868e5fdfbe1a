//! # CLI Structure and Argument Parsing
//!
//! Defines the command-line interface for `mdtoc` using `clap` derive
//! macros. The CLI follows a command-subcommand pattern:
//!
//! - **Global options**: apply to all commands (`--verbose`, `--debug`)
//! - **Subcommands**: `headings` for the flat list, `toc` for the nested
//!   outline
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Nested outline of a post, human-readable
//! mdtoc toc content/post/index.mdx
//!
//! # Flat heading list as JSON for scripting
//! mdtoc headings content/post/index.mdx --format json | jq '.[].id'
//!
//! # Read from stdin, capped at h3
//! cat README.md | mdtoc toc --max-depth 3
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Top-level CLI for the `mdtoc` command.
#[derive(Debug, Parser)]
#[command(name = "mdtoc", version, about = "Extract tables of contents from markdown/MDX")]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the flat heading list in document order
    Headings(DocumentArgs),
    /// Print the nested outline tree
    Toc(DocumentArgs),
}

/// Arguments shared by the document-reading subcommands.
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Markdown/MDX file to read; "-" or omitted reads stdin
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Drop headings deeper than this level
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub max_depth: Option<u8>,
}
