//! # treedoc CLI Update Integration Tests
//!
//! File: cli/tests/update.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! End-to-end runs of `treedoc [PATH]` against temporary directories:
//! README creation, in-place replacement, appending, printing, the
//! interactive gate, and error exits.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const START: &str = "<!-- START OF DIRECTORY STRUCTURE -->";
const END: &str = "<!-- END OF DIRECTORY STRUCTURE -->";

#[test]
fn test_creates_readme_with_tree() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();
    make_js_project(root);

    treedoc_cmd()
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory structure created"));

    let readme = fs::read_to_string(root.join("README.md")).expect("README written");
    let expected = format!(
        "# Project Directory Structure\n\n{}\n```\n├── src/\n│   └── a.js\n└── readme-note.txt\n```\n{}\n",
        START, END
    );
    assert_eq!(readme, expected);
}

#[test]
fn test_second_run_is_byte_identical() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();
    make_js_project(root);
    let readme_path = root.join("docs/STRUCTURE.md");
    fs::create_dir(root.join("docs")).expect("create docs");
    fs::write(&readme_path, "# Notes\n\nHand-written text.\n").expect("seed readme");

    // The document lives in the tree, so list it and ignore `docs` to keep
    // the tree input identical across runs.
    let run = || {
        treedoc_cmd()
            .arg(root)
            .args(["--readme"])
            .arg(&readme_path)
            .args(["--ignore", "docs"])
            .assert()
            .success();
        fs::read(&readme_path).expect("read readme")
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);

    let text = String::from_utf8(first).expect("utf8");
    assert!(text.starts_with("# Notes\n\nHand-written text.\n"));
    assert!(text.contains(START) && text.contains(END));
    assert!(!text.contains("docs/"));
}

#[test]
fn test_replaces_existing_region_only() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("main.rs"), "").expect("write main.rs");
    let original = format!(
        "# Title\n\n{}\n```\nstale/\n```\n{}\n\nFooter stays.\n",
        START, END
    );
    fs::write(root.join("README.md"), &original).expect("seed readme");

    treedoc_cmd()
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory structure updated"));

    let readme = fs::read_to_string(root.join("README.md")).expect("read readme");
    assert_eq!(
        readme,
        format!(
            "# Title\n\n{}\n```\n├── README.md\n└── main.rs\n```\n{}\n\nFooter stays.\n",
            START, END
        )
    );
}

#[test]
fn test_empty_directory_gets_empty_fence() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();
    let readme_path = temp_dir.path().join("out").join("TREE.md");

    treedoc_cmd()
        .arg(root)
        .arg("--readme")
        .arg(&readme_path)
        .args(["--ignore", "out"])
        .assert()
        .success();

    let readme = fs::read_to_string(&readme_path).expect("read readme");
    assert!(readme.contains(&format!("{}\n```\n\n```\n{}", START, END)));
}

#[test]
fn test_print_mode_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();
    make_js_project(root);

    treedoc_cmd()
        .arg(root)
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "├── src/\n│   └── a.js\n└── readme-note.txt\n",
        ));

    assert!(!root.join("README.md").exists());
}

#[test]
fn test_interleaved_order_and_no_default_ignores() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();
    make_js_project(root);

    treedoc_cmd()
        .arg(root)
        .args(["--print", "--order", "interleaved", "--no-default-ignores"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "├── node_modules/\n│   └── pkg/\n│       └── index.js\n├── readme-note.txt\n└── src/\n    └── a.js\n",
        ));
}

#[test]
fn test_nonexistent_path_fails() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("nope");

    treedoc_cmd()
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nope").and(predicate::str::contains("does not exist")));

    assert!(!missing.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).expect("list").count(), 0);
}

// Piped stdin is never a terminal, so `--interactive` cancels without prompting.
// The answer paths themselves are covered by the scripted-operator unit tests in
// `common/ui/prompts.rs`.
#[test]
fn test_interactive_without_terminal_cancels() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();
    make_js_project(root);

    treedoc_cmd()
        .arg(root)
        .arg("--interactive")
        .write_stdin("src\ny\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("needs a terminal")
                .and(predicate::str::contains("Operation cancelled."))
                .and(predicate::str::contains("Directory structure").not()),
        );

    assert!(!root.join("README.md").exists());
}

#[test]
fn test_interactive_print_without_terminal_prints_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();
    make_js_project(root);

    treedoc_cmd()
        .arg(root)
        .args(["--interactive", "--print"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Operation cancelled.")
                .and(predicate::str::contains("readme-note.txt").not()),
        );
}
