//! Integration Test: No Panicking Shortcuts in the Core
//!
//! **Policy**: production code in `shell/core` returns errors instead of
//! calling `unwrap()` or `expect()`.
//! **Exceptions**: test code, doc examples

use architectural_enforcement::find_violations;

fn is_panicking_shortcut(code: &str) -> bool {
    code.contains(".unwrap()") || code.contains(".expect(")
}

#[test]
fn test_no_unwrap_in_core() {
    let violations = find_violations("shell/core/src", is_panicking_shortcut);
    assert!(
        violations.is_empty(),
        "unwrap()/expect() in shell/core production code:\n{}",
        violations.join("\n")
    );
}
