//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. Time only moves
//! through `Shell::frame(dt)`; frame pacing in the TUI uses
//! `tokio::time::interval()`.
//! **Exceptions**: test code

use architectural_enforcement::find_violations;

const CHECKED_DIRS: &[&str] = &["shell/core/src", "shell/runner/src", "tui/src"];

fn is_sleep_call(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(") || code.contains("sleep_until(")
}

#[test]
fn test_no_sleep_in_production_code() {
    let violations: Vec<String> = CHECKED_DIRS
        .iter()
        .flat_map(|dir| find_violations(dir, is_sleep_call))
        .collect();

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Sleep calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ ACCEPTABLE:");
        eprintln!("  - Periodic frames using tokio::time::interval()");
        eprintln!("  - Test code");
        panic!(
            "\nFound {} sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

#[test]
fn test_sleep_detection() {
    assert!(is_sleep_call("std::thread::sleep(d);"));
    assert!(is_sleep_call("tokio::time::sleep(d).await;"));
    assert!(!is_sleep_call("ticker.tick().await;"));
}
