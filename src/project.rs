use crate::error::{AgentsError, Result};
use std::path::{Path, PathBuf};

/// Directory Claude Code reads project configuration from.
pub const CLAUDE_DIR: &str = ".claude";

#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Use the current directory as the project root
    pub fn detect() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            AgentsError::ProjectDetection(format!("Failed to get current directory: {}", e))
        })?;
        Self::at(&cwd)
    }

    /// Use an explicit project root
    pub fn at(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(AgentsError::ProjectDetection(format!(
                "Not a directory: {}",
                root.display()
            )));
        }

        // Canonicalize to resolve any .. or symlinks
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn claude_dir(&self) -> PathBuf {
        self.root.join(CLAUDE_DIR)
    }

    pub fn has_claude_dir(&self) -> bool {
        self.claude_dir().is_dir()
    }
}
