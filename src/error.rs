use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentsError {
    #[error("Unable to read agent catalog at {path}: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown agent: {0}\nRun 'claude-agents list' to see available agents.")]
    UnknownAgent(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No agents selected. Pass --agent, --category or --all.")]
    NothingSelected,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Project detection failed: {0}")]
    ProjectDetection(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AgentsError>;
