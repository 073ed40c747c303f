//! Set arithmetic between the catalog and a project's installed agents.

use super::category::{group_by_category, CategoryGroups};
use super::scanner::CatalogEntry;
use std::collections::HashSet;

/// Catalog entries whose id is not installed, in catalog order.
pub fn not_installed(available: &[CatalogEntry], installed: &[String]) -> Vec<CatalogEntry> {
    let installed: HashSet<&str> = installed.iter().map(String::as_str).collect();
    available
        .iter()
        .filter(|entry| !installed.contains(entry.id.as_str()))
        .cloned()
        .collect()
}

/// Same filter as [`not_installed`], applied to one category's entries.
pub fn category_not_installed(
    category_entries: &[CatalogEntry],
    installed: &[String],
) -> Vec<CatalogEntry> {
    not_installed(category_entries, installed)
}

/// True when every entry is already installed. Vacuously true for no entries.
pub fn is_fully_installed(entries: &[CatalogEntry], installed: &[String]) -> bool {
    let installed: HashSet<&str> = installed.iter().map(String::as_str).collect();
    entries.iter().all(|entry| installed.contains(entry.id.as_str()))
}

/// Installed ids that no longer exist in the catalog.
pub fn orphaned(available: &[CatalogEntry], installed: &[String]) -> Vec<String> {
    let known: HashSet<&str> = available.iter().map(|e| e.id.as_str()).collect();
    installed
        .iter()
        .filter(|id| !known.contains(id.as_str()))
        .cloned()
        .collect()
}

/// Snapshot of catalog vs. installed state.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub available: Vec<CatalogEntry>,
    pub installed: Vec<String>,
    pub not_installed: Vec<CatalogEntry>,
    pub by_category: CategoryGroups,
    pub orphaned: Vec<String>,
}

impl Reconciliation {
    pub fn compute(available: Vec<CatalogEntry>, installed: Vec<String>) -> Self {
        let missing = not_installed(&available, &installed);
        let by_category = group_by_category(&available);
        let orphaned = orphaned(&available, &installed);

        if !orphaned.is_empty() {
            tracing::debug!(?orphaned, "installed agents missing from catalog");
        }

        Self {
            available,
            installed,
            not_installed: missing,
            by_category,
            orphaned,
        }
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.installed.iter().any(|installed| installed == id)
    }

    /// True when nothing is left to install.
    pub fn is_fully_installed(&self) -> bool {
        is_fully_installed(&self.available, &self.installed)
    }

    /// Installed ids that resolve to a catalog entry, in installed order.
    pub fn installed_in_catalog(&self) -> Vec<String> {
        self.installed
            .iter()
            .filter(|id| !self.orphaned.contains(id))
            .cloned()
            .collect()
    }
}
