use crate::agents::{install_agents, selection};
use crate::catalog::extract::{self, UNREADABLE_DESCRIPTION};
use crate::catalog::{CatalogEntry, Reconciliation};
use crate::cli::InstallCmd;
use crate::commands::helpers::{confirm, load_state, prompt, sorted_installed};
use crate::commands::regenerate::update_instructions;
use crate::config::ResolvedPaths;
use crate::error::{AgentsError, Result};
use crate::project::Project;
use std::io::IsTerminal;

pub fn execute(project: &Project, paths: &ResolvedPaths, cmd: &InstallCmd) -> Result<()> {
    println!("Claude Code Agent Installer");
    println!();

    if !project.has_claude_dir() {
        println!("No .claude directory found in {}", project.root().display());
        if !cmd.yes && !confirm("Create a .claude directory here?", true)? {
            println!("Installation cancelled.");
            return Ok(());
        }
        std::fs::create_dir_all(project.claude_dir())?;
        println!("Created {}", project.claude_dir().display());
    }

    let (catalog, state) = load_state(paths)?;

    if catalog.is_empty() {
        println!("No agents available in {}", paths.source_dir.display());
        return Ok(());
    }

    println!("Agents available: {}", state.available.len());
    println!("Agents already installed: {}", state.installed.len());
    println!();

    // Explicit flags are checked even when there is nothing left to install
    let flags = cmd.selection.to_selection();
    let requested = if flags.is_empty() {
        None
    } else {
        Some(selection::resolve(&flags, &state)?)
    };

    if state.is_fully_installed() {
        println!("All agents are already installed!");
        return Ok(());
    }

    let selected = match requested {
        Some(ids) => ids,
        None => select_interactively(&state)?,
    };
    if selected.is_empty() {
        println!("No agents selected. Installation cancelled.");
        return Ok(());
    }

    println!("Agents selected for installation:");
    for id in &selected {
        println!("  - {}", id);
    }
    println!();

    if !cmd.yes && !confirm(&format!("Install {} agent(s)?", selected.len()), true)? {
        println!("Installation cancelled.");
        return Ok(());
    }

    let show_progress = std::io::stderr().is_terminal();
    let summary = install_agents(&catalog, &selected, &paths.installed_dir, show_progress)?;

    for id in &summary.installed {
        println!("  Installed {}", id);
    }
    for (id, reason) in &summary.failed {
        println!("  Failed to install {}: {}", id, reason);
    }

    println!();
    println!("Installation summary:");
    println!("  Installed successfully: {}", summary.success_count());
    if summary.error_count() > 0 {
        println!("  Errors: {}", summary.error_count());
    }

    if summary.success_count() > 0 {
        println!("  Path: {}", paths.installed_dir.display());

        if !cmd.no_instructions {
            println!();
            update_instructions(paths, &catalog, &sorted_installed(paths))?;
        }
    }

    Ok(())
}

/// Ask for the agents to install from a numbered list.
fn select_interactively(state: &Reconciliation) -> Result<Vec<String>> {
    if !std::io::stdin().is_terminal() {
        return Err(AgentsError::NothingSelected);
    }

    let choices = interactive_choices(state);
    let mut number = 0;
    for group in state.by_category.iter() {
        let pending: Vec<&CatalogEntry> = choices
            .iter()
            .filter(|entry| group.entries.iter().any(|e| e.id == entry.id))
            .collect();
        if pending.is_empty() {
            continue;
        }

        println!("{}:", group.category.display_name);
        for entry in pending {
            number += 1;
            println!("  {:>3}. {:<40} {}", number, entry.id, short_description(entry));
        }
    }
    println!();

    let answer = prompt("Select agents to install (e.g. 1,3,5-7 or 'all'): ")?;
    selection::parse_choice(&answer, &choices)
}

/// Not-installed entries in the order they are numbered on screen.
fn interactive_choices(state: &Reconciliation) -> Vec<CatalogEntry> {
    state
        .by_category
        .iter()
        .flat_map(|group| group.entries.iter())
        .filter(|entry| !state.is_installed(&entry.id))
        .cloned()
        .collect()
}

fn short_description(entry: &CatalogEntry) -> String {
    entry
        .read()
        .map(|document| extract::describe(&document))
        .unwrap_or_else(|_| UNREADABLE_DESCRIPTION.to_string())
}
