//! Rendering of the generated agent instruction block.

use super::{END_MARKER, START_MARKER};
use crate::catalog::extract::{self, NO_USAGE};
use crate::catalog::{Catalog, CatalogEntry};

/// Prefix stripped from ids when an agent declares no `name:`.
pub const FALLBACK_ID_PREFIX: &str = "installer.";

const SECTION_HEADER: &str = "## Installed Agents\n\n\
The following specialized agents are installed in this project. \
Delegate to them when a task matches their expertise.\n";

const CLOSING_GUIDANCE: &str = "### Working with agents\n\n\
- Prefer the most specific agent for a task; fall back to general work otherwise.\n\
- Agents can be combined: run them one after another for multi-step tasks.\n\
- This section is generated by claude-agents. Edit outside the markers; \
changes inside are overwritten on the next regeneration.\n";

/// Resolves installed ids to catalog entries and their documents.
pub trait DefinitionLookup {
    fn lookup(&self, id: &str) -> Option<&CatalogEntry>;

    fn read(&self, entry: &CatalogEntry) -> std::io::Result<String> {
        entry.read()
    }
}

impl DefinitionLookup for Catalog {
    fn lookup(&self, id: &str) -> Option<&CatalogEntry> {
        self.get(id)
    }
}

/// Rendered block plus what happened to each requested id.
#[derive(Debug, Clone, Default)]
pub struct RenderedBlock {
    pub content: String,
    /// Ids that produced a subsection
    pub rendered: Vec<String>,
    /// Ids with no catalog entry
    pub orphaned: Vec<String>,
    /// Ids whose definition could not be read, with the reason
    pub failed: Vec<(String, String)>,
}

impl RenderedBlock {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Identifier shown for an agent: its declared name, else the id without
/// [`FALLBACK_ID_PREFIX`].
pub fn agent_identifier(id: &str, document: &str) -> String {
    extract::extract_name(document)
        .unwrap_or_else(|| id.strip_prefix(FALLBACK_ID_PREFIX).unwrap_or(id).to_string())
}

/// `docs.changelog` -> `Docs Changelog`
pub fn display_label(identifier: &str) -> String {
    identifier
        .replace('.', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render_agent(out: &mut String, id: &str, document: &str) {
    let identifier = agent_identifier(id, document);
    let label = display_label(&identifier);
    let usage = extract::extract_usage(document).unwrap_or_else(|| NO_USAGE.to_string());

    out.push_str(&format!("### {}\n", label));
    out.push_str(&format!("**Agent:** `{}`\n", identifier));
    out.push_str(&format!("**When to use:** {}\n", usage));
    out.push_str(&format!(
        "**How to invoke:** Ask Claude to \"use the {} agent\" for matching tasks.\n",
        identifier
    ));
    out.push_str("\n---\n\n");
}

/// Render the instruction block for `installed_ids`, in the given order.
///
/// Ids missing from `lookup` are skipped as orphaned; unreadable definitions
/// are skipped and reported. Neither stops the remaining ids from rendering.
pub fn render<L: DefinitionLookup + ?Sized>(
    installed_ids: &[String],
    lookup: &L,
    preamble: Option<&str>,
) -> RenderedBlock {
    let mut block = RenderedBlock::default();
    let mut out = String::new();

    out.push_str(START_MARKER);
    out.push('\n');

    if let Some(preamble) = preamble {
        out.push_str(preamble);
        if !preamble.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(SECTION_HEADER);
    out.push('\n');

    for id in installed_ids {
        let Some(entry) = lookup.lookup(id) else {
            block.orphaned.push(id.clone());
            continue;
        };

        match lookup.read(entry) {
            Ok(document) => {
                render_agent(&mut out, id, &document);
                block.rendered.push(id.clone());
            }
            Err(e) => {
                tracing::warn!(agent = %id, error = %e, "skipping unreadable agent definition");
                block.failed.push((id.clone(), e.to_string()));
            }
        }
    }

    out.push_str(CLOSING_GUIDANCE);
    out.push_str(END_MARKER);
    out.push('\n');

    block.content = out;
    block
}
