use claude_agents::catalog::Catalog;
use claude_agents::instructions::{
    self, merge, render, TargetDocument, END_MARKER, START_MARKER,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_agent(dir: &Path, id: &str, body: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(format!("{}.md", id)), body).unwrap();
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// No existing document: skeleton plus exactly one block with one subsection
#[test]
fn test_first_run_creates_skeleton() {
    let root = TempDir::new().unwrap();
    let catalog_dir = root.path().join("catalog");
    write_agent(&catalog_dir, "a.docs.x", "description: Writes docs.\n");

    let catalog = Catalog::load(&catalog_dir).unwrap();
    let target = TargetDocument::new(root.path().join("CLAUDE.md"));

    let outcome = instructions::regenerate(&target, &ids(&["a.docs.x"]), &catalog, None).unwrap();
    assert!(outcome.was_new_document);
    assert_eq!(outcome.block.rendered, vec!["a.docs.x"]);

    let content = fs::read_to_string(root.path().join("CLAUDE.md")).unwrap();
    assert!(content.starts_with("# CLAUDE.md\n"));
    assert_eq!(content.matches(START_MARKER).count(), 1);
    assert_eq!(content.matches(END_MARKER).count(), 1);
    assert_eq!(content.matches("\n### ").count(), 2); // one agent + closing guidance
    assert!(content.contains("### A Docs X\n"));
    assert!(content.contains("**Agent:** `a.docs.x`"));
}

/// A stale block for old.x is replaced by a block for new.y; user prose survives
#[test]
fn test_stale_block_replaced() {
    let root = TempDir::new().unwrap();
    let catalog_dir = root.path().join("catalog");
    write_agent(&catalog_dir, "old.x", "name: old-agent\n");
    write_agent(&catalog_dir, "new.y", "name: new-agent\n");
    let catalog = Catalog::load(&catalog_dir).unwrap();

    let stale = render(&ids(&["old.x"]), &catalog, None);
    let prose_before = "# My Project\n\nUse tabs, not spaces.\n";
    let prose_after = "\n## Deployment\n\nShip on Fridays only.\n";
    let original = format!("{}\n{}{}", prose_before, stale.content, prose_after);

    let target_path = root.path().join("CLAUDE.md");
    fs::write(&target_path, &original).unwrap();

    let target = TargetDocument::new(&target_path);
    let outcome = instructions::regenerate(&target, &ids(&["new.y"]), &catalog, None).unwrap();
    assert!(!outcome.was_new_document);

    let content = fs::read_to_string(&target_path).unwrap();
    assert!(content.contains("`new-agent`"));
    assert!(!content.contains("old-agent"));
    assert!(content.starts_with(prose_before));
    assert!(content.contains("## Deployment\n\nShip on Fridays only."));
    assert_eq!(content.matches(START_MARKER).count(), 1);
    assert!(content.ends_with(&format!("{}\n", END_MARKER)));
}

#[test]
fn test_regenerate_twice_is_stable() {
    let root = TempDir::new().unwrap();
    let catalog_dir = root.path().join("catalog");
    write_agent(&catalog_dir, "a.docs.x", "name: x\n");
    write_agent(&catalog_dir, "b.backend.y", "name: y\n");
    let catalog = Catalog::load(&catalog_dir).unwrap();

    let target_path = root.path().join("CLAUDE.md");
    fs::write(&target_path, "# Rules\n\nBe kind.\n").unwrap();
    let target = TargetDocument::new(&target_path);

    let installed = ids(&["a.docs.x", "b.backend.y"]);
    instructions::regenerate(&target, &installed, &catalog, Some("Preamble text")).unwrap();
    let first = fs::read_to_string(&target_path).unwrap();
    instructions::regenerate(&target, &installed, &catalog, Some("Preamble text")).unwrap();
    let second = fs::read_to_string(&target_path).unwrap();

    assert_eq!(first, second);
    assert!(second.starts_with("# Rules\n\nBe kind.\n\n"));
    assert_eq!(second.matches("Preamble text").count(), 1);
}

#[test]
fn test_merge_twice_keeps_second_block_only() {
    let document = "intro\n\n  indented line\n\nouter text\n";
    let b1 = render(&[], &Catalog::default(), Some("first preamble"));
    let b2 = render(&[], &Catalog::default(), Some("second preamble"));

    let once = merge(Some(document), &b1.content);
    let twice = merge(Some(&once.content), &b2.content);

    assert_eq!(twice.content.matches(START_MARKER).count(), 1);
    assert!(twice.content.contains("second preamble"));
    assert!(!twice.content.contains("first preamble"));
    assert_eq!(
        twice.content,
        format!("{}\n\n{}", document.trim_end(), b2.content)
    );
}

#[test]
fn test_orphaned_and_unreadable_are_skipped() {
    let root = TempDir::new().unwrap();
    let catalog_dir = root.path().join("catalog");
    write_agent(&catalog_dir, "a.docs.x", "name: x\n");
    write_agent(&catalog_dir, "b.docs.y", "name: y\n");
    let catalog = Catalog::load(&catalog_dir).unwrap();

    // Definition disappears after the scan
    fs::remove_file(catalog_dir.join("b.docs.y.md")).unwrap();

    let block = render(&ids(&["a.docs.x", "b.docs.y", "gone.z"]), &catalog, None);
    assert_eq!(block.rendered, vec!["a.docs.x"]);
    assert_eq!(block.orphaned, vec!["gone.z"]);
    assert_eq!(block.failed.len(), 1);
    assert_eq!(block.failed[0].0, "b.docs.y");
}

#[test]
fn test_missing_preamble_file_degrades() {
    let root = TempDir::new().unwrap();
    assert!(instructions::load_preamble(Some(root.path().join("nope.md").as_path())).is_none());
    assert!(instructions::load_preamble(None).is_none());

    let file = root.path().join("preamble.md");
    fs::write(&file, "## Context\n").unwrap();
    assert_eq!(
        instructions::load_preamble(Some(file.as_path())).as_deref(),
        Some("## Context\n")
    );
}
