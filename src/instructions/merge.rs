//! Merging the generated block into a user-owned document.

use super::{END_MARKER, START_MARKER};
use std::ops::Range;

/// Skeleton used when the target document does not exist yet.
pub const SKELETON: &str = "# CLAUDE.md\n\n\
This file provides guidance to Claude Code when working with code in this repository.\n";

/// Where a previously generated block sits in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLocation {
    /// Byte range from the start marker through the end of the end marker
    Found(Range<usize>),
    Missing,
    /// Markers present, but no start marker precedes any end marker
    Malformed,
}

/// Locate the generated block in `document`.
///
/// The block is the first end marker paired with the nearest start marker
/// before it. Unpaired markers elsewhere are treated as user text.
pub fn locate_block(document: &str) -> BlockLocation {
    for (end, _) in document.match_indices(END_MARKER) {
        if let Some(start) = document[..end].rfind(START_MARKER) {
            return BlockLocation::Found(start..end + END_MARKER.len());
        }
    }

    if document.contains(START_MARKER) || document.contains(END_MARKER) {
        BlockLocation::Malformed
    } else {
        BlockLocation::Missing
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub content: String,
    pub was_new_document: bool,
}

/// Replace any previous generated block in `existing` with `block`.
///
/// The old block is cut out, the remainder is right-trimmed and the new block
/// is appended after one blank line. Everything outside the markers is kept
/// as-is. Malformed markers leave the document untouched and the block is
/// still appended.
pub fn merge(existing: Option<&str>, block: &str) -> MergeResult {
    let (document, was_new_document) = match existing {
        Some(document) => (document, false),
        None => (SKELETON, true),
    };

    let remaining = match locate_block(document) {
        BlockLocation::Found(range) => {
            let mut spliced = String::with_capacity(document.len());
            spliced.push_str(&document[..range.start]);
            spliced.push_str(&document[range.end..]);
            spliced
        }
        BlockLocation::Missing => document.to_string(),
        BlockLocation::Malformed => {
            tracing::warn!("generated block markers are malformed; appending a new block");
            document.to_string()
        }
    };

    let remaining = remaining.trim_end();
    let content = if remaining.is_empty() {
        block.to_string()
    } else {
        format!("{}\n\n{}", remaining, block)
    };

    MergeResult {
        content,
        was_new_document,
    }
}
