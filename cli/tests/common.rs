//! # treedoc CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`main_tests.rs`, `update.rs`).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and runs
//! the compiled `treedoc` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// # Get treedoc Command (`treedoc_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `treedoc` binary with
/// `RUST_LOG` cleared so log output never leaks into assertions.
///
/// ## Panics
/// Panics if the `treedoc` binary cannot be found via `Command::cargo_bin`.
pub fn treedoc_cmd() -> Command {
    let mut cmd = Command::cargo_bin("treedoc").expect("Failed to find treedoc binary for testing");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Creates the fixture used across tests:
///
/// ```text
/// root/
/// ├── node_modules/      (ignored by default)
/// │   └── pkg/index.js
/// ├── src/
/// │   └── a.js
/// └── readme-note.txt
/// ```
pub fn make_js_project(root: &Path) {
    fs::create_dir_all(root.join("src")).expect("create src");
    fs::write(root.join("src/a.js"), "console.log('a');").expect("write a.js");
    fs::create_dir_all(root.join("node_modules/pkg")).expect("create node_modules");
    fs::write(root.join("node_modules/pkg/index.js"), "").expect("write index.js");
    fs::write(root.join("readme-note.txt"), "note").expect("write note");
}
