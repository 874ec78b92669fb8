//! Integration Test: Headless Core
//!
//! **Policy**: `shell/core` MUST NOT depend on or import any UI framework or
//! async runtime. Surfaces depend on the core, never the other way round.

use std::fs;

use architectural_enforcement::{find_violations, workspace_root};

/// Crates that belong to surfaces, not the core
const FORBIDDEN_CRATES: &[&str] = &["ratatui", "crossterm", "tokio", "futures", "omnipository_tui"];

#[test]
fn test_core_sources_have_no_ui_imports() {
    let violations = find_violations("shell/core/src", |code| {
        FORBIDDEN_CRATES
            .iter()
            .any(|krate| code.contains(&format!("{krate}::")))
    });

    if !violations.is_empty() {
        eprintln!("\n❌ UI or runtime imports found in the shell core!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        panic!(
            "\nFound {} forbidden import(s) in shell/core.\nMove this code into a surface crate.",
            violations.len()
        );
    }
}

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest_path = workspace_root().join("shell/core/Cargo.toml");
    let manifest = fs::read_to_string(&manifest_path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", manifest_path.display()));

    let dependencies = manifest
        .split("[dependencies]")
        .nth(1)
        .and_then(|rest| rest.split("\n[").next())
        .unwrap_or_default();

    for krate in FORBIDDEN_CRATES {
        let name = krate.replace('_', "-");
        let declared = dependencies.lines().any(|line| {
            let line = line.trim_start();
            line.starts_with(&format!("{name} ")) || line.starts_with(&format!("{name}="))
        });
        assert!(!declared, "shell/core must not depend on {name}");
    }
}
