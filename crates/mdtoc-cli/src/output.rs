//! # Output Formatting
//!
//! Rendering for the `mdtoc` subcommands. Three formats are supported:
//!
//! - **Text**: human-readable, indentation mirrors heading depth, anchor id
//!   dimmed after the heading text
//! - **JSON**: one pretty-printed array for programmatic consumption
//! - **JSONL**: newline-delimited records for streaming pipelines
//!
//! Colors are suppressed automatically when stdout is not a terminal.

use clap::ValueEnum;
use colored::Colorize;
use is_terminal::IsTerminal;
use mdtoc_core::{Heading, OutlineEntry};

/// How a subcommand renders its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable indented listing
    Text,
    /// Pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Disable colored output when stdout is not a tty.
pub fn configure_color() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Render the flat heading list, indenting by heading level.
pub fn print_headings_text(headings: &[Heading]) {
    for heading in headings {
        let indent = "  ".repeat(usize::from(heading.level.get() - 1));
        println!("{}- {}  {}", indent, heading.text, heading.id.bright_black());
    }
}

/// Render the outline tree, indenting by tree depth.
pub fn print_outline_text(entries: &[OutlineEntry], depth: usize) {
    for entry in entries {
        let indent = "  ".repeat(depth);
        println!("{}- {}  {}", indent, entry.text, entry.id.bright_black());
        print_outline_text(&entry.children, depth + 1);
    }
}
