//! # treedoc UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! Terminal interaction beyond plain `println!`. Currently this is the
//! `prompts` submodule, which implements the optional ignore-list gate run
//! before traversal when `--interactive` is given.
//!
//! ```rust
//! use crate::common::ui::prompts::{self, GateOutcome};
//!
//! match prompts::terminal_gate(IgnoreSet::with_defaults())? {
//!     GateOutcome::Confirmed(ignores) => { /* build the tree */ }
//!     GateOutcome::Declined | GateOutcome::NoTerminal => println!("Operation cancelled."),
//! }
//! ```
//!

/// `dialoguer` prompts for the ignore-list gate (extra names and a `[y/N]` confirmation).
pub mod prompts;
