//! Best-effort field extraction from agent definition documents.
//!
//! Agent definitions are markdown files with a loose `key: value` header.
//! Nothing here validates the document; a missing field is `None` and the
//! caller picks a fallback.

use regex::Regex;
use std::sync::LazyLock;

/// Descriptions longer than this are shortened for display.
pub const DESCRIPTION_MAX_CHARS: usize = 45;

/// Number of characters kept when a description is shortened.
pub const DESCRIPTION_KEEP_CHARS: usize = 42;

/// Shown when a definition has no `description:` field.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Shown when a definition cannot be read at all.
pub const UNREADABLE_DESCRIPTION: &str = "Failed to read description.";

/// Usage text used when neither `instruction:` nor `description:` is present.
pub const NO_USAGE: &str = "Use this agent when its expertise matches the task.";

const EXAMPLES_MARKER: &str = "Examples:";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^name:[ \t]*(.+)").expect("valid name regex"));
static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"description:\s*(.+)").expect("valid description regex"));
static DESCRIPTION_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^description:[ \t]*(.+)").expect("valid description field regex")
});
static INSTRUCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^instruction:[ \t]*(.+)").expect("valid instruction regex")
});

/// Return the value of the first line starting with `field: value`.
///
/// The value runs to the end of the line and is trimmed. A field with an
/// empty value is treated as absent.
pub fn extract_field(document: &str, field: &str) -> Option<String> {
    let pattern = format!(r"(?m)^{}:[ \t]*(.+)", regex::escape(field));
    match Regex::new(&pattern) {
        Ok(re) => first_capture(&re, document),
        Err(e) => {
            tracing::warn!(field, error = %e, "unusable field pattern");
            None
        }
    }
}

/// Extract the agent's declared name (`name:` at the start of a line).
pub fn extract_name(document: &str) -> Option<String> {
    first_capture(&NAME_RE, document)
}

/// Extract a one-sentence description suitable for list output.
///
/// The text is cut at the first `.`, a `.` is re-appended and the result is
/// shortened to fit [`DESCRIPTION_MAX_CHARS`].
pub fn extract_description(document: &str) -> Option<String> {
    let raw = DESCRIPTION_RE.captures(document)?.get(1)?.as_str().trim();
    let sentence = raw.split('.').next().unwrap_or_default();
    Some(truncate_description(&format!("{}.", sentence)))
}

/// Description or [`NO_DESCRIPTION`].
pub fn describe(document: &str) -> String {
    extract_description(document).unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Shorten `text` to `DESCRIPTION_KEEP_CHARS` plus `...` when it is longer
/// than `DESCRIPTION_MAX_CHARS` characters.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_MAX_CHARS {
        let kept: String = text.chars().take(DESCRIPTION_KEEP_CHARS).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

/// Resolve the "when to use" guidance for an agent.
///
/// An explicit `instruction:` field wins. Otherwise the description is used,
/// cut before any `Examples:` section.
pub fn extract_usage(document: &str) -> Option<String> {
    if let Some(instruction) = first_capture(&INSTRUCTION_RE, document) {
        return Some(instruction);
    }

    let description = first_capture(&DESCRIPTION_FIELD_RE, document)?;
    let usage = match description.find(EXAMPLES_MARKER) {
        Some(idx) => &description[..idx],
        None => description.as_str(),
    };
    let usage = usage.trim();

    if usage.is_empty() {
        None
    } else {
        Some(usage.to_string())
    }
}

fn first_capture(re: &Regex, document: &str) -> Option<String> {
    let value = re.captures(document)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
