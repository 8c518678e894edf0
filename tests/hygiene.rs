//! Hygiene checks enforced at test time.
//!
//! These tests scan the crate's production sources for antipatterns and for
//! the structural shape of the route protection. Each antipattern has a
//! budget; if you must add an occurrence, fix an existing one first. The
//! budget never grows.

use std::fs;
use std::path::PathBuf;

// Panics kill the WASM module and leave the page dead.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Deliberate discards: sessionStorage writes, logger init, and unused
// parameters in cfg-gated server arms. Ratcheted, not forbidden.
const MAX_SILENT_DISCARD: usize = 12;
const MAX_DOT_OK: usize = 10;

// Structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding sibling test files.
fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    let mut pending = vec![PathBuf::from("src")];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if path.extension().is_none_or(|e| e != "rs") {
                continue;
            }
            let name = path.to_string_lossy().to_string();
            if name.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                files.push(SourceFile { path: name, content });
            }
        }
    }
    files
}

/// Count `pattern` across production sources and fail when over `max`.
fn assert_budget(pattern: &str, max: usize, hint: &str) {
    let mut hits = Vec::new();
    let mut count = 0;
    for file in production_sources() {
        let n = file.content.lines().filter(|line| line.contains(pattern)).count();
        if n > 0 {
            hits.push(format!("  {}: {n}", file.path));
            count += n;
        }
    }
    assert!(
        count <= max,
        "{pattern} budget exceeded: found {count}, max {max}. {hint}\n{}",
        hits.join("\n")
    );
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP, "Propagate or degrade instead of panicking.");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT, "Propagate or degrade instead of panicking.");
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC, "Return an error or render a fallback.");
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE, "Model the case instead.");
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO, "Ship no stubs.");
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED, "Ship no stubs.");
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD, "Inspect the error or log it.");
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK, "Inspect the error or log it.");
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE, "Delete unused code.");
}

// Route protection is structural: the guard wires into the editor page and
// nowhere else, and the editor form sits behind the session gate.

#[test]
fn login_guard_is_wired_only_from_the_editor_page() {
    let mut holders: Vec<String> = production_sources()
        .into_iter()
        .filter(|file| file.content.contains("install_login_guard"))
        .map(|file| file.path)
        .collect();
    holders.sort();
    assert_eq!(
        holders,
        ["src/pages/recipe_editor.rs", "src/util/guard.rs"],
        "the home and detail pages must stay guard-free"
    );
}

#[test]
fn editor_form_renders_behind_the_session_gate() {
    let sources = production_sources();
    let editor = sources
        .iter()
        .find(|file| file.path == "src/pages/recipe_editor.rs")
        .expect("editor page source exists");
    let gate = editor
        .content
        .find("when=move || session.logged_in()")
        .expect("editor gates on the session flag");
    let form = editor.content.find("<form").expect("editor renders a form");
    assert!(gate < form, "the session gate must wrap the form markup");
    assert!(
        editor.content.contains("recipe-editor__pending"),
        "logged-out renders need the pending placeholder"
    );
}
