use crate::catalog::Catalog;
use crate::commands::helpers::sorted_installed;
use crate::config::ResolvedPaths;
use crate::error::Result;
use crate::instructions::{self, Regenerated, TargetDocument};

pub fn execute(paths: &ResolvedPaths) -> Result<()> {
    let catalog = Catalog::load(&paths.source_dir)?;
    let installed = sorted_installed(paths);

    let outcome = update_instructions(paths, &catalog, &installed)?;

    if outcome.block.rendered.is_empty() {
        println!("No installed agents; agent section reset.");
    }

    Ok(())
}

/// Regenerate the agent section and report the outcome.
///
/// Shared by `regenerate` and `install`.
pub fn update_instructions(
    paths: &ResolvedPaths,
    catalog: &Catalog,
    installed: &[String],
) -> Result<Regenerated> {
    let preamble = instructions::load_preamble(paths.preamble_file.as_deref());
    let target = TargetDocument::new(&paths.target_document);

    let outcome = instructions::regenerate(&target, installed, catalog, preamble.as_deref())?;

    let verb = if outcome.was_new_document {
        "Created"
    } else {
        "Updated"
    };
    println!(
        "{} {} with {} agent(s)",
        verb,
        target.path().display(),
        outcome.block.rendered.len()
    );

    for (id, reason) in &outcome.block.failed {
        println!("  Skipped {}: {}", id, reason);
    }

    Ok(outcome)
}
