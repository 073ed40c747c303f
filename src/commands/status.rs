use crate::commands::helpers::load_state;
use crate::config::ResolvedPaths;
use crate::error::Result;
use crate::project::Project;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatusReport {
    project: String,
    installed_dir: String,
    available: usize,
    installed: Vec<String>,
    not_installed: Vec<String>,
}

pub fn execute(project: &Project, paths: &ResolvedPaths, json: bool) -> Result<()> {
    let (_, state) = load_state(paths)?;
    let not_installed: Vec<String> = state.not_installed.iter().map(|e| e.id.clone()).collect();

    if json {
        let report = StatusReport {
            project: project.root().display().to_string(),
            installed_dir: paths.installed_dir.display().to_string(),
            available: state.available.len(),
            installed: state.installed.clone(),
            not_installed,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Agent status:");
    println!("  Project: {}", project.root().display());
    println!("  Installed agents dir: {}", paths.installed_dir.display());

    if !project.has_claude_dir() {
        println!();
        println!("No .claude directory found in this project.");
        println!("Run 'claude-agents install' to set one up.");
        return Ok(());
    }

    println!();
    println!("  Available: {}", state.available.len());
    println!("  Installed: {}", state.installed.len());
    println!("  Not installed: {}", not_installed.len());

    if !state.installed.is_empty() {
        println!("\nInstalled agents:");
        for id in &state.installed {
            println!("  - {}", id);
        }
    }

    if !not_installed.is_empty() {
        println!("\nNot installed:");
        for id in &not_installed {
            println!("  - {}", id);
        }
    }

    Ok(())
}
