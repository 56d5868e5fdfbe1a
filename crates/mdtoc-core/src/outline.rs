//! Flat-to-tree outline reconstruction.
//!
//! A heading's children are exactly the contiguous run of subsequent
//! headings with strictly greater level, up to the next heading at the same
//! or shallower level. Level jumps tolerate missing intermediates: an `h4`
//! directly after an `h2` nests under the `h2` - no heading is dropped and
//! no synthetic node is invented. A single forward pass with an explicit
//! stack of open ancestor levels does the whole job; recursion is avoided on
//! purpose since document length, unlike nesting depth, is unbounded.

use crate::extract::extract_headings;
use crate::types::{Heading, HeadingLevel, OutlineEntry};

/// Fold a document-ordered heading sequence into an outline tree.
#[must_use]
pub fn build_outline(headings: Vec<Heading>) -> Vec<OutlineEntry> {
    let mut roots: Vec<OutlineEntry> = Vec::new();
    let mut open_levels: Vec<HeadingLevel> = Vec::new();

    for heading in headings {
        // Ancestors at the same or deeper level cannot contain this heading.
        while open_levels.last().is_some_and(|&top| top >= heading.level) {
            open_levels.pop();
        }

        let level = heading.level;
        let siblings = last_children_at(&mut roots, open_levels.len());
        siblings.push(OutlineEntry::from(heading));
        open_levels.push(level);
    }

    roots
}

/// Extract a document's outline directly from raw source.
///
/// Equivalent to [`extract_headings`] followed by [`build_outline`]; shares
/// their failure semantics (never errors, empty tree for headingless input).
#[must_use]
pub fn extract_outline(source: &str) -> Vec<OutlineEntry> {
    build_outline(extract_headings(source))
}

/// Walk `depth` steps down the chain of last children.
///
/// Each open ancestor is by construction the last entry of its sibling list,
/// so following `last_mut` links lands on the insertion point for the next
/// entry. The `None` arm is unreachable while the open-level stack is kept
/// in sync, but keeps the walk total.
fn last_children_at(roots: &mut Vec<OutlineEntry>, depth: usize) -> &mut Vec<OutlineEntry> {
    let mut current = roots;
    for _ in 0..depth {
        match current.len().checked_sub(1) {
            Some(last) => current = &mut current[last].children,
            None => break,
        }
    }
    current
}
