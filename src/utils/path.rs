use std::path::{Path, PathBuf};
use uzers::os::unix::UserExt;

/// Expand a leading `~` or `~user` to a home directory.
///
/// Paths without a leading tilde are returned unchanged. Returns `None` when
/// the home directory cannot be determined.
///
/// # Examples
///
/// ```
/// use claude_agents::utils::path::expand_tilde;
///
/// let path = expand_tilde("~/.claude-agents/catalog").unwrap();
/// assert!(path.ends_with(".claude-agents/catalog"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_str()?;

    let Some(after_tilde) = path_str.strip_prefix('~') else {
        return Some(path.to_path_buf());
    };

    if after_tilde.is_empty() || after_tilde.starts_with('/') {
        let home = std::env::var("HOME").ok()?;
        return Some(PathBuf::from(home).join(after_tilde.trim_start_matches('/')));
    }

    let (username, rest) = match after_tilde.find('/') {
        Some(idx) => (&after_tilde[..idx], after_tilde[idx..].trim_start_matches('/')),
        None => (after_tilde, ""),
    };

    let user = uzers::get_user_by_name(username)?;
    Some(user.home_dir().join(rest))
}

/// Resolve a configured path: expand `~`, then anchor relative paths at `base`.
pub fn resolve(base: &Path, raw: &str) -> PathBuf {
    let expanded = expand_tilde(raw).unwrap_or_else(|| PathBuf::from(raw));
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_expand_tilde_current_user() {
        let home = env::var("HOME").unwrap();

        assert_eq!(expand_tilde("~").unwrap(), PathBuf::from(&home));
        assert_eq!(
            expand_tilde("~/.claude-agents/catalog").unwrap(),
            PathBuf::from(format!("{}/.claude-agents/catalog", home))
        );
    }

    #[test]
    fn test_expand_tilde_nonexistent_user() {
        assert!(expand_tilde("~nonexistentuser12345/file").is_none());
    }

    #[test]
    fn test_expand_tilde_no_tilde() {
        assert_eq!(
            expand_tilde("/absolute/path").unwrap(),
            PathBuf::from("/absolute/path")
        );
        assert_eq!(
            expand_tilde("relative/path").unwrap(),
            PathBuf::from("relative/path")
        );
        assert_eq!(
            expand_tilde("/path/~user/file").unwrap(),
            PathBuf::from("/path/~user/file")
        );
    }

    #[test]
    #[serial]
    fn test_expand_tilde_no_home_env() {
        let original_home = env::var("HOME").ok();
        env::remove_var("HOME");

        assert!(expand_tilde("~/file").is_none());

        if let Some(home) = original_home {
            env::set_var("HOME", home);
        }
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let base = Path::new("/work/project");
        assert_eq!(
            resolve(base, ".claude/agents"),
            PathBuf::from("/work/project/.claude/agents")
        );
        assert_eq!(resolve(base, "/opt/catalog"), PathBuf::from("/opt/catalog"));
    }

    #[test]
    #[serial]
    fn test_resolve_tilde_ignores_base() {
        let home = env::var("HOME").unwrap();
        assert_eq!(
            resolve(Path::new("/work"), "~/catalog"),
            PathBuf::from(format!("{}/catalog", home))
        );
    }
}
