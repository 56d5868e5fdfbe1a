//! # mdtoc-core
//!
//! Core functionality for mdtoc - heading extraction and table-of-contents
//! building for markdown/MDX source.
//!
//! This crate scans raw authoring-time markdown (it never looks at rendered
//! output), detects ATX heading lines, derives URL-fragment-safe anchor ids
//! that are unique within one document, and optionally folds the flat heading
//! sequence into a nested outline tree. It is the join point between a
//! document's source and whatever renders its anchors: the ids produced here
//! are stable across runs, so permalinks survive rebuilds.
//!
//! ## Architecture
//!
//! The crate is organized around a handful of small components:
//!
//! - **Extraction**: line-anchored heading detection over raw source
//! - **Slugs**: the anchor-id policy and per-document uniqueness allocation
//! - **Outline**: stack-based flat-to-tree reconstruction
//! - **Types**: serde-ready records handed to presentation layers
//!
//! ## Quick Start
//!
//! ```rust
//! use mdtoc_core::{extract, extract_outline};
//!
//! let source = "## Overview\n### Details\n## Summary\n";
//!
//! let result = extract(source);
//! assert_eq!(result.headings.len(), 3);
//! assert_eq!(result.headings[0].id, "overview");
//!
//! let outline = extract_outline(source);
//! assert_eq!(outline.len(), 2); // "Details" nests under "Overview"
//! ```
//!
//! ## Failure Semantics
//!
//! Extraction never fails. Empty input, input with no heading lines, and
//! arbitrary binary-ish text all degrade to an empty result with a
//! [`Diagnostic`] attached, never an error: a missing table of contents must
//! not block content rendering. The only fallible surface is programmatic
//! construction of a [`HeadingLevel`] from an out-of-range integer.
//!
//! ## Concurrency
//!
//! Every operation is synchronous, pure, and allocation-local; the slug
//! allocator and outline stack live inside a single call. Concurrent calls
//! over different documents need no coordination.

/// Error types and result aliases
pub mod error;
/// Heading detection over raw markdown source
pub mod extract;
/// Flat-to-tree outline reconstruction
pub mod outline;
/// Anchor-id derivation and per-document uniqueness
pub mod slug;
/// Core data types handed to presentation layers
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{Extraction, extract, extract_headings};
pub use outline::{build_outline, extract_outline};
pub use slug::{SlugAllocator, slugify};
pub use types::{Diagnostic, DiagnosticSeverity, Heading, HeadingLevel, OutlineEntry};
