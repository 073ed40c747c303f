//! Generated agent instructions inside the project's CLAUDE.md.
//!
//! claude-agents owns exactly one region of the target document, delimited
//! by [`START_MARKER`] and [`END_MARKER`]. Each regeneration renders the
//! region from scratch and swaps it in; everything outside the markers
//! belongs to the user and is left alone.

pub mod document;
pub mod merge;
pub mod render;

pub use document::TargetDocument;
pub use merge::{merge, MergeResult};
pub use render::{render, DefinitionLookup, RenderedBlock};

use crate::error::Result;
use std::path::Path;

pub const START_MARKER: &str = "<!-- CLAUDE-AGENTS:START -->";
pub const END_MARKER: &str = "<!-- CLAUDE-AGENTS:END -->";

/// Result of rewriting the target document.
#[derive(Debug, Clone)]
pub struct Regenerated {
    pub block: RenderedBlock,
    pub was_new_document: bool,
}

/// Read an optional preamble fragment. A missing or unreadable file yields
/// `None`.
pub fn load_preamble(path: Option<&Path>) -> Option<String> {
    let path = path?;
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "preamble unavailable");
            None
        }
    }
}

/// Render the block for `installed_ids` and merge it into `target`.
pub fn regenerate<L: DefinitionLookup + ?Sized>(
    target: &TargetDocument,
    installed_ids: &[String],
    lookup: &L,
    preamble: Option<&str>,
) -> Result<Regenerated> {
    let block = render(installed_ids, lookup, preamble);
    let existing = target.read()?;
    let merged = merge(existing.as_deref(), &block.content);
    target.write(&merged.content)?;

    tracing::debug!(
        path = %target.path().display(),
        rendered = block.rendered.len(),
        new_document = merged.was_new_document,
        "regenerated agent instructions"
    );

    Ok(Regenerated {
        block,
        was_new_document: merged.was_new_document,
    })
}
