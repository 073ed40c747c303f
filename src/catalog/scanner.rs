//! Directory scanning for the source catalog and the installed collection.

use crate::error::{AgentsError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of agent definition documents.
pub const DEFINITION_EXTENSION: &str = ".md";

/// One agent definition document found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// File name without the extension
    pub id: String,
    pub source_path: PathBuf,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            source_path: source_path.into(),
        }
    }

    /// Read the raw definition document.
    pub fn read(&self) -> std::io::Result<String> {
        fs::read_to_string(&self.source_path)
    }
}

/// List the definition documents of the source catalog, in directory order.
///
/// The catalog is authoritative: failing to list it is an error.
pub fn list_collection(dir: &Path) -> Result<Vec<CatalogEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|source| AgentsError::CatalogUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|source| AgentsError::CatalogUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        if let Some(id) = definition_id(&dir_entry.file_name().to_string_lossy()) {
            entries.push(CatalogEntry::new(id, dir_entry.path()));
        }
    }

    tracing::debug!(dir = %dir.display(), count = entries.len(), "scanned agent catalog");
    Ok(entries)
}

/// List the ids installed in a project, in directory order.
///
/// A missing or unreadable directory means nothing is installed yet.
pub fn list_installed(dir: &Path) -> Vec<String> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "no installed agents");
            return Vec::new();
        }
    };

    read_dir
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| definition_id(&entry.file_name().to_string_lossy()))
        .collect()
}

/// Strip the definition extension, skipping files that don't carry it.
fn definition_id(file_name: &str) -> Option<String> {
    file_name
        .strip_suffix(DEFINITION_EXTENSION)
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

/// The scanned source catalog with id lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Scan `dir` into a catalog.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self::from_entries(list_collection(dir)?))
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.id.clone(), i))
            .collect();
        Self { entries, index }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
