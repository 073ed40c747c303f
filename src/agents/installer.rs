//! Copies selected agent definitions into a project.

use crate::catalog::Catalog;
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Per-agent outcome of an installation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub installed: Vec<String>,
    /// Agent id and the reason it failed
    pub failed: Vec<(String, String)>,
}

impl InstallSummary {
    pub fn success_count(&self) -> usize {
        self.installed.len()
    }

    pub fn error_count(&self) -> usize {
        self.failed.len()
    }
}

/// Copy each selected definition into `installed_dir`.
///
/// The directory is created if needed. A failing agent is recorded in the
/// summary and the remaining agents are still installed.
pub fn install_agents(
    catalog: &Catalog,
    selected: &[String],
    installed_dir: &Path,
    show_progress: bool,
) -> Result<InstallSummary> {
    fs::create_dir_all(installed_dir)?;

    let progress = if show_progress {
        ProgressBar::new(selected.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}") {
        progress.set_style(style);
    }

    let mut summary = InstallSummary::default();

    for id in selected {
        progress.set_message(id.clone());

        match install_one(catalog, id, installed_dir) {
            Ok(()) => {
                tracing::debug!(agent = %id, "installed agent");
                summary.installed.push(id.clone());
            }
            Err(reason) => {
                tracing::warn!(agent = %id, %reason, "agent installation failed");
                summary.failed.push((id.clone(), reason));
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(summary)
}

fn install_one(catalog: &Catalog, id: &str, installed_dir: &Path) -> std::result::Result<(), String> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| format!("'{}' is not in the catalog", id))?;

    let file_name = entry
        .source_path
        .file_name()
        .ok_or_else(|| format!("invalid source path: {}", entry.source_path.display()))?;

    fs::copy(&entry.source_path, installed_dir.join(file_name))
        .map(|_| ())
        .map_err(|e| e.to_string())
}
