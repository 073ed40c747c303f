use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // Release builds report the plain crate version
    let full_version = if profile == "debug" {
        let hash = git_output(&["rev-parse", "--short=8", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
        let suffix = if git_has_changes() { ".dirty" } else { "" };
        format!("{}-dev+{}{}", version, hash, suffix)
    } else {
        version
    };

    println!("cargo:rustc-env=CLAUDE_AGENTS_VERSION={}", full_version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn git_has_changes() -> bool {
    [&["diff", "--quiet"][..], &["diff", "--cached", "--quiet"][..]]
        .iter()
        .any(|args| {
            Command::new("git")
                .args(*args)
                .status()
                .map(|status| !status.success())
                .unwrap_or(false)
        })
}
