use crate::catalog::extract::{self, UNREADABLE_DESCRIPTION};
use crate::catalog::CatalogEntry;
use crate::commands::helpers::load_state;
use crate::config::ResolvedPaths;
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ListedAgent {
    id: String,
    category: &'static str,
    installed: bool,
    description: String,
}

fn description_of(entry: &CatalogEntry) -> String {
    match entry.read() {
        Ok(document) => extract::describe(&document),
        Err(_) => UNREADABLE_DESCRIPTION.to_string(),
    }
}

pub fn execute(paths: &ResolvedPaths, json: bool) -> Result<()> {
    let (_, state) = load_state(paths)?;

    if json {
        let agents: Vec<ListedAgent> = state
            .by_category
            .iter()
            .flat_map(|group| {
                group.entries.iter().map(|entry| ListedAgent {
                    id: entry.id.clone(),
                    category: group.category.key,
                    installed: state.is_installed(&entry.id),
                    description: description_of(entry),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&agents)?);
        return Ok(());
    }

    if state.available.is_empty() {
        println!("No agents found in {}", paths.source_dir.display());
        return Ok(());
    }

    println!("Available agents:");
    for group in state.by_category.iter() {
        println!();
        println!(
            "{} ({}) - {}",
            group.category.display_name, group.category.key, group.category.description
        );
        for entry in &group.entries {
            let status = if state.is_installed(&entry.id) {
                "installed"
            } else {
                "not installed"
            };
            println!("  {:<40} [{}]", entry.id, status);
            println!("      {}", description_of(entry));
        }
    }

    Ok(())
}
