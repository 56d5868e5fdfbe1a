//! Subcommand execution: read one document, extract, render.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use mdtoc_core::{Diagnostic, HeadingLevel, build_outline, extract};
use tracing::warn;

use crate::cli::DocumentArgs;
use crate::output::{self, OutputFormat};

/// `mdtoc headings` - flat heading list in document order.
pub fn headings(args: &DocumentArgs) -> Result<()> {
    let source = read_source(args.file.as_deref())?;
    let extraction = extract(&source);
    report_diagnostics(&extraction.diagnostics);

    let mut records = extraction.headings;
    if let Some(depth) = args.max_depth {
        let cap = HeadingLevel::new(depth)?;
        records.retain(|h| h.level <= cap);
    }

    match args.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&records)
                    .context("Failed to serialize headings to JSON")?
            );
        },
        OutputFormat::Jsonl => {
            for record in &records {
                println!(
                    "{}",
                    serde_json::to_string(record)
                        .context("Failed to serialize heading to JSONL")?
                );
            }
        },
        OutputFormat::Text => output::print_headings_text(&records),
    }

    Ok(())
}

/// `mdtoc toc` - nested outline tree.
pub fn toc(args: &DocumentArgs) -> Result<()> {
    let source = read_source(args.file.as_deref())?;
    let extraction = extract(&source);
    report_diagnostics(&extraction.diagnostics);

    let mut records = extraction.headings;
    if let Some(depth) = args.max_depth {
        let cap = HeadingLevel::new(depth)?;
        records.retain(|h| h.level <= cap);
    }
    let outline = build_outline(records);

    match args.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&outline)
                    .context("Failed to serialize outline to JSON")?
            );
        },
        OutputFormat::Jsonl => {
            for entry in &outline {
                println!(
                    "{}",
                    serde_json::to_string(entry)
                        .context("Failed to serialize outline entry to JSONL")?
                );
            }
        },
        OutputFormat::Text => output::print_outline_text(&outline, 0),
    }

    Ok(())
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read from stdin")?;
            Ok(source)
        },
    }
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.line {
            Some(line) => warn!(line, "{}", diagnostic.message),
            None => warn!("{}", diagnostic.message),
        }
    }
}
