use serde::{Deserialize, Serialize};

use crate::error::Error;

/// ATX heading depth, 1 (most significant) through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Validating constructor; rejects anything outside 1-6.
    pub const fn new(level: u8) -> Result<Self, Error> {
        if matches!(level, 1..=6) {
            Ok(Self(level))
        } else {
            Err(Error::InvalidLevel(level))
        }
    }

    /// The level as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Error> {
        Self::new(level)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

/// One heading record in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// URL-fragment-safe anchor id, unique within one extraction.
    pub id: String,
    /// Literal heading content, markers stripped, trimmed.
    pub text: String,
    /// Depth derived from the marker count.
    pub level: HeadingLevel,
}

/// A heading together with the headings nested beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Anchor id, same policy and uniqueness scope as [`Heading::id`].
    pub id: String,
    /// Literal heading content.
    pub text: String,
    /// Depth derived from the marker count.
    pub level: HeadingLevel,
    /// Subsequent headings of strictly greater level, in document order.
    pub children: Vec<OutlineEntry>,
}

impl From<Heading> for OutlineEntry {
    fn from(heading: Heading) -> Self {
        Self {
            id: heading.id,
            text: heading.text,
            level: heading.level,
            children: Vec::new(),
        }
    }
}

/// Non-fatal condition observed while extracting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How serious the condition is.
    pub severity: DiagnosticSeverity,
    /// Human-readable description.
    pub message: String,
    /// 1-based source line, when the condition is tied to one.
    pub line: Option<usize>,
}

/// Severity attached to a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Extraction could not proceed at all.
    Error,
    /// Output is degraded but usable.
    Warn,
    /// Informational only.
    Info,
}
