//! Anchor-id derivation for headings.
//!
//! The slug policy is deliberately self-contained rather than delegated to a
//! rendering pipeline's conventions: lowercase where the script has case,
//! keep letters of any script, digits, whitespace, and hyphens, drop
//! everything else, then collapse whitespace and hyphen runs into single
//! hyphens and trim the ends. Multi-script heading text (the common case for
//! this crate's source material) passes through rather than stripping to
//! nothing.
//!
//! [`SlugAllocator`] layers per-document uniqueness on top. It is constructed
//! fresh for each extraction, so ids never leak between documents.

use std::collections::{HashMap, HashSet};

/// Base used when a heading's text slugifies to nothing at all.
const EMPTY_SLUG_BASE: &str = "section";

/// Derive the base anchor id for a piece of heading text.
///
/// The result may be empty when the input contains no letters or digits;
/// [`SlugAllocator::allocate`] substitutes a fallback in that case.
///
/// ```rust
/// use mdtoc_core::slugify;
///
/// assert_eq!(slugify("Getting Started!"), "getting-started");
/// assert_eq!(slugify("Redis 개요"), "redis-개요");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
            continue;
        }
        for lower in ch.to_lowercase() {
            // Characters outside the allowed set vanish without acting as
            // separators, matching remove-then-collapse ordering.
            if lower.is_alphanumeric() {
                if pending_separator && !slug.is_empty() {
                    slug.push('-');
                }
                pending_separator = false;
                slug.push(lower);
            }
        }
    }

    slug
}

/// Per-document slug uniqueness tracker.
///
/// The first occurrence of a base slug keeps the bare form; the n-th repeat
/// is suffixed `-n` (`x`, `x-1`, `x-2`, ...). A suffixed candidate that
/// happens to collide with an id already handed out (a later heading whose
/// text literally slugifies to `x-1`, say) keeps advancing the counter until
/// the candidate is unused, so no two ids from one allocator are ever equal.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    counts: HashMap<String, u32>,
    emitted: HashSet<String>,
}

impl SlugAllocator {
    /// Create an empty allocator for one document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a unique id for `text`, recording it against future calls.
    pub fn allocate(&mut self, text: &str) -> String {
        let base = {
            let slug = slugify(text);
            if slug.is_empty() {
                EMPTY_SLUG_BASE.to_string()
            } else {
                slug
            }
        };

        let mut next = self.counts.get(&base).copied().unwrap_or(0);
        let mut candidate = if next == 0 {
            base.clone()
        } else {
            format!("{base}-{next}")
        };
        next += 1;

        while !self.emitted.insert(candidate.clone()) {
            candidate = format!("{base}-{next}");
            next += 1;
        }

        self.counts.insert(base, next);
        candidate
    }
}
