use crate::cli::Cli;
use crate::error::Result;
use crate::utils::path;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file name, looked up in the home directory and the project root.
pub const CONFIG_FILE: &str = ".claude-agents.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Directory holding the agent catalog
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Project-relative directory of installed agents
    #[serde(default = "default_installed_dir")]
    pub installed_dir: String,

    /// Project-relative document that receives the generated block
    #[serde(default = "default_target_document")]
    pub target_document: String,

    /// Optional fragment inserted at the top of the generated block
    #[serde(default)]
    pub preamble_file: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            installed_dir: default_installed_dir(),
            target_document: default_target_document(),
            preamble_file: None,
        }
    }
}

fn default_source_dir() -> String {
    "~/.claude-agents/catalog".to_string()
}

fn default_installed_dir() -> String {
    ".claude/agents".to_string()
}

fn default_target_document() -> String {
    "CLAUDE.md".to_string()
}

/// Absolute locations every component works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub source_dir: PathBuf,
    pub installed_dir: PathBuf,
    pub target_document: PathBuf,
    pub preamble_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Environment variables
    /// 3. Project config (.claude-agents.toml in project root)
    /// 4. Global config (~/.claude-agents.toml)
    /// 5. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = home_dir() {
            let global_config = home.join(CONFIG_FILE);
            if global_config.exists() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        let project_config = project_root.join(CONFIG_FILE);
        if project_config.exists() {
            config = config.merge(Self::from_file(&project_config)?);
        }

        Ok(config.merge_env())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.paths.source_dir != default_source_dir() {
            self.paths.source_dir = other.paths.source_dir;
        }
        if other.paths.installed_dir != default_installed_dir() {
            self.paths.installed_dir = other.paths.installed_dir;
        }
        if other.paths.target_document != default_target_document() {
            self.paths.target_document = other.paths.target_document;
        }
        if other.paths.preamble_file.is_some() {
            self.paths.preamble_file = other.paths.preamble_file;
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        if let Some(dir) = non_empty("CLAUDE_AGENTS_SOURCE_DIR") {
            self.paths.source_dir = dir;
        }
        if let Some(dir) = non_empty("CLAUDE_AGENTS_INSTALLED_DIR") {
            self.paths.installed_dir = dir;
        }
        if let Some(doc) = non_empty("CLAUDE_AGENTS_TARGET_DOCUMENT") {
            self.paths.target_document = doc;
        }
        if let Some(file) = non_empty("CLAUDE_AGENTS_PREAMBLE_FILE") {
            self.paths.preamble_file = Some(file);
        }

        self
    }

    /// Apply CLI overrides (highest precedence)
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.source_dir {
            self.paths.source_dir = dir.to_string_lossy().to_string();
        }

        self
    }

    /// Resolve configured paths against the project root.
    pub fn resolve(&self, project_root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            source_dir: path::resolve(project_root, &self.paths.source_dir),
            installed_dir: path::resolve(project_root, &self.paths.installed_dir),
            target_document: path::resolve(project_root, &self.paths.target_document),
            preamble_file: self
                .paths
                .preamble_file
                .as_deref()
                .map(|file| path::resolve(project_root, file)),
        }
    }
}

/// Get the home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        for var in [
            "CLAUDE_AGENTS_SOURCE_DIR",
            "CLAUDE_AGENTS_INSTALLED_DIR",
            "CLAUDE_AGENTS_TARGET_DOCUMENT",
            "CLAUDE_AGENTS_PREAMBLE_FILE",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.source_dir, "~/.claude-agents/catalog");
        assert_eq!(config.paths.installed_dir, ".claude/agents");
        assert_eq!(config.paths.target_document, "CLAUDE.md");
        assert!(config.paths.preamble_file.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
            [paths]
            source_dir = "/opt/agents"
        "#;

        let config: Config = toml::from_str(toml).expect("Failed to parse config");
        assert_eq!(config.paths.source_dir, "/opt/agents");
        assert_eq!(config.paths.installed_dir, ".claude/agents");
    }

    #[test]
    fn test_merge_config() {
        let mut base = Config::default();
        base.paths.source_dir = "/global/catalog".to_string();
        base.paths.preamble_file = Some("~/preamble.md".to_string());

        let mut override_cfg = Config::default();
        override_cfg.paths.target_document = "docs/AGENTS.md".to_string();

        let merged = base.merge(override_cfg);
        assert_eq!(merged.paths.source_dir, "/global/catalog"); // Kept from base
        assert_eq!(merged.paths.target_document, "docs/AGENTS.md"); // From override
        assert_eq!(merged.paths.preamble_file.as_deref(), Some("~/preamble.md"));
    }

    #[test]
    fn test_cli_override_only_touches_source_dir() {
        use clap::Parser;

        let cli = Cli::parse_from(["claude-agents", "-v", "--source-dir", "/cli/catalog", "list"]);
        let mut config = Config::default();
        config.paths.target_document = "docs/AGENTS.md".to_string();

        let config = config.with_cli_overrides(&cli);
        assert_eq!(config.paths.source_dir, "/cli/catalog");
        assert_eq!(config.paths.target_document, "docs/AGENTS.md");
        assert_eq!(config.paths.installed_dir, ".claude/agents");
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = Config::default();
        config.paths.source_dir = "/opt/catalog".to_string();
        config.paths.preamble_file = Some("context/preamble.md".to_string());

        let resolved = config.resolve(Path::new("/work/app"));
        assert_eq!(resolved.source_dir, PathBuf::from("/opt/catalog"));
        assert_eq!(resolved.installed_dir, PathBuf::from("/work/app/.claude/agents"));
        assert_eq!(resolved.target_document, PathBuf::from("/work/app/CLAUDE.md"));
        assert_eq!(
            resolved.preamble_file,
            Some(PathBuf::from("/work/app/context/preamble.md"))
        );
    }

    #[test]
    #[serial]
    fn test_load_layers_project_and_env() {
        clear_env();
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();

        std::fs::write(
            home.path().join(CONFIG_FILE),
            "[paths]\nsource_dir = \"/global\"\ntarget_document = \"GLOBAL.md\"\n",
        )
        .unwrap();
        std::fs::write(
            project.path().join(CONFIG_FILE),
            "[paths]\ntarget_document = \"PROJECT.md\"\n",
        )
        .unwrap();

        let original_home = std::env::var("HOME").ok();
        std::env::set_var("HOME", home.path());
        std::env::set_var("CLAUDE_AGENTS_INSTALLED_DIR", "custom/agents");

        let config = Config::load(project.path()).unwrap();

        if let Some(h) = original_home {
            std::env::set_var("HOME", h);
        }
        clear_env();

        assert_eq!(config.paths.source_dir, "/global");
        assert_eq!(config.paths.target_document, "PROJECT.md");
        assert_eq!(config.paths.installed_dir, "custom/agents");
    }

    #[test]
    #[serial]
    fn test_load_invalid_toml_fails() {
        clear_env();
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        std::fs::write(project.path().join(CONFIG_FILE), "[paths\nbroken").unwrap();

        let original_home = std::env::var("HOME").ok();
        std::env::set_var("HOME", home.path());

        let result = Config::load(project.path());

        if let Some(h) = original_home {
            std::env::set_var("HOME", h);
        }

        assert!(matches!(
            result,
            Err(crate::error::AgentsError::ConfigParse(_))
        ));
    }
}
