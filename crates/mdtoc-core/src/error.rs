//! Error types and handling for mdtoc-core operations.
//!
//! Extraction itself is infallible by contract: malformed or empty input
//! degrades to an empty result with diagnostics attached (see
//! [`crate::extract`]). The error type here covers the remaining fallible
//! surface, which is programmatic construction of domain values from
//! untrusted integers - today that means heading levels arriving from
//! deserialized data or caller arithmetic rather than from the line scanner.

use thiserror::Error;

/// The main error type for mdtoc-core operations.
///
/// All fallible public functions in mdtoc-core return `Result<T, Error>`.
/// `Display` provides user-friendly messages; `Debug` includes full detail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A heading level outside the valid ATX range of 1-6.
    ///
    /// The line scanner can only produce in-range levels (the heading
    /// pattern matches one to six marker characters), so this arises from
    /// deserialization or manual construction.
    #[error("invalid heading level {0}, expected 1-6")]
    InvalidLevel(u8),
}

impl Error {
    /// Machine-readable category for the error, for callers that branch on
    /// error classes rather than variants.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidLevel(_) => "validation",
        }
    }
}

/// Convenient result type for mdtoc-core operations.
pub type Result<T> = std::result::Result<T, Error>;
