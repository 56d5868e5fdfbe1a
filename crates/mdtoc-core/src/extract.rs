//! Line-anchored heading detection over raw markdown/MDX source.
//!
//! The scan is deliberately a per-line pattern match rather than a full
//! markdown parse: ids must be computable from authoring-time source,
//! independent of any rendering library's grammar. A line is a heading iff
//! it starts with one to six `#` markers followed by at least one whitespace
//! character and non-empty text. A `#` anywhere else on a line (issue
//! references, hashtags) never produces a record.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::slug::SlugAllocator;
use crate::types::{Diagnostic, DiagnosticSeverity, Heading, HeadingLevel};

#[allow(clippy::expect_used)]
static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("literal pattern compiles"));

/// Everything one extraction pass produced.
///
/// Mirrors the shape handed to presentation layers: the flat heading list in
/// document order, plus diagnostics for the degraded cases that are not
/// errors by contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Headings in document order, ids already unique.
    pub headings: Vec<Heading>,
    /// Non-fatal conditions observed during the pass.
    pub diagnostics: Vec<Diagnostic>,
    /// Total lines scanned.
    pub line_count: usize,
}

/// Extract the flat heading sequence from raw source.
///
/// Never fails and never panics: empty input, input without a single heading
/// line, and arbitrary non-markdown text all yield an empty heading list
/// with a diagnostic attached. Re-running on the same input reproduces the
/// same ids in the same order.
#[must_use]
pub fn extract(source: &str) -> Extraction {
    if source.is_empty() {
        warn!("empty source given to heading extraction");
        return Extraction {
            headings: Vec::new(),
            diagnostics: vec![Diagnostic {
                severity: DiagnosticSeverity::Warn,
                message: "Empty source, nothing to extract".into(),
                line: None,
            }],
            line_count: 0,
        };
    }

    let mut headings = Vec::new();
    let mut diagnostics = Vec::new();
    let mut ids = SlugAllocator::new();

    for line in source.lines() {
        let Some(captures) = HEADING_LINE.captures(line) else {
            continue;
        };

        let markers = captures.get(1).map_or("", |m| m.as_str());
        let text = captures.get(2).map_or("", |m| m.as_str()).trim();
        if text.is_empty() {
            continue;
        }

        // The pattern only matches 1-6 markers, so this cannot skip in
        // practice; the let-else keeps the routine total regardless.
        let Ok(count) = u8::try_from(markers.len()) else {
            continue;
        };
        let Ok(level) = HeadingLevel::new(count) else {
            continue;
        };

        headings.push(Heading {
            id: ids.allocate(text),
            text: text.to_string(),
            level,
        });
    }

    if headings.is_empty() {
        debug!("no headings found in document");
        diagnostics.push(Diagnostic {
            severity: DiagnosticSeverity::Warn,
            message: "No headings found in document".into(),
            line: Some(1),
        });
    }

    Extraction {
        headings,
        diagnostics,
        line_count: source.lines().count(),
    }
}

/// Convenience wrapper returning only the heading list.
#[must_use]
pub fn extract_headings(source: &str) -> Vec<Heading> {
    extract(source).headings
}
