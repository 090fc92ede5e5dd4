//! # treedoc Commands
//!
//! File: cli/src/commands/mod.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! Command handlers for the CLI. treedoc has a single command, so its
//! arguments are flattened into the top-level parser in `main.rs` rather than
//! exposed as a subcommand.
//!
//! - **`update`**: Build the directory tree and write it into the README's managed region.
//!

/// Handler and arguments for `treedoc [PATH]`.
pub mod update;
