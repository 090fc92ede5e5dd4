//! # treedoc Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from the
//! command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: Document reading and atomic writing.
//! - **`ui`**: Operator interaction (ignore-list prompt and confirmation).
//!

/// Utilities for filesystem operations (document I/O).
pub mod fs;
/// Utilities for operator interaction on the terminal.
pub mod ui;
