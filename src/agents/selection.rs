//! Turning user choices into a concrete list of agent ids to install.

use crate::catalog::reconcile::{self, Reconciliation};
use crate::catalog::{Category, CatalogEntry};
use crate::error::{AgentsError, Result};

/// What the user asked to install on the command line.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub agents: Vec<String>,
    pub categories: Vec<String>,
    pub all: bool,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        !self.all && self.agents.is_empty() && self.categories.is_empty()
    }
}

/// Resolve a selection into not-yet-installed ids, in catalog order for
/// `--all` and categories, then in the order agents were named.
///
/// Already-installed agents are dropped silently; unknown ids and category
/// keys are errors.
pub fn resolve(selection: &Selection, state: &Reconciliation) -> Result<Vec<String>> {
    let mut ids: Vec<String> = Vec::new();

    if selection.all {
        for entry in &state.not_installed {
            push_unique(&mut ids, &entry.id);
        }
    }

    for key in &selection.categories {
        let category =
            Category::find(key).ok_or_else(|| AgentsError::UnknownCategory(key.clone()))?;

        if let Some(group) = state.by_category.get(category.key) {
            for entry in reconcile::category_not_installed(&group.entries, &state.installed) {
                push_unique(&mut ids, &entry.id);
            }
        }
    }

    for id in &selection.agents {
        if !state.available.iter().any(|entry| &entry.id == id) {
            return Err(AgentsError::UnknownAgent(id.clone()));
        }
        if state.is_installed(id) {
            tracing::debug!(agent = %id, "already installed, skipping");
            continue;
        }
        push_unique(&mut ids, id);
    }

    Ok(ids)
}

fn push_unique(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}

/// Parse an interactive answer such as `1,3`, `2-4` or `all` against the
/// numbered `choices`, returning the chosen ids.
pub fn parse_choice(input: &str, choices: &[CatalogEntry]) -> Result<Vec<String>> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Ok(choices.iter().map(|e| e.id.clone()).collect());
    }

    let mut ids: Vec<String> = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (start, end) = match part.split_once('-') {
            Some((a, b)) => (parse_index(a, choices.len())?, parse_index(b, choices.len())?),
            None => {
                let n = parse_index(part, choices.len())?;
                (n, n)
            }
        };

        if start > end {
            return Err(AgentsError::InvalidSelection(format!(
                "range '{}' is reversed",
                part
            )));
        }

        for entry in &choices[start - 1..end] {
            if !ids.contains(&entry.id) {
                ids.push(entry.id.clone());
            }
        }
    }

    Ok(ids)
}

fn parse_index(raw: &str, count: usize) -> Result<usize> {
    let n: usize = raw
        .trim()
        .parse()
        .map_err(|_| AgentsError::InvalidSelection(format!("'{}' is not a number", raw.trim())))?;

    if n == 0 || n > count {
        return Err(AgentsError::InvalidSelection(format!(
            "{} is out of range (1-{})",
            n, count
        )));
    }
    Ok(n)
}
