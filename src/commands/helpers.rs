use crate::catalog::{list_installed, Catalog, Reconciliation};
use crate::config::ResolvedPaths;
use crate::error::Result;
use std::io::{self, Write};

/// Ask a yes/no question on stdout and read the answer from stdin.
///
/// An empty answer picks `default_yes`.
pub fn confirm(question: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    let answer = prompt(&format!("{} {} ", question, hint))?;
    let answer = answer.trim().to_lowercase();

    if answer.is_empty() {
        return Ok(default_yes);
    }
    Ok(answer == "y" || answer == "yes")
}

/// Print `message` without a newline and read one line from stdin.
pub fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

/// Installed ids sorted by id, so generated output does not depend on
/// directory listing order.
pub fn sorted_installed(paths: &ResolvedPaths) -> Vec<String> {
    let mut installed = list_installed(&paths.installed_dir);
    installed.sort();
    installed
}

/// Scan the catalog and reconcile it with the project's installed agents.
pub fn load_state(paths: &ResolvedPaths) -> Result<(Catalog, Reconciliation)> {
    let catalog = Catalog::load(&paths.source_dir)?;
    let state = Reconciliation::compute(catalog.entries().to_vec(), sorted_installed(paths));
    Ok((catalog, state))
}
