//! # treedoc Interactive Prompts
//!
//! File: cli/src/common/ui/prompts.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! The ignore-list gate run before traversal when `--interactive` is given:
//! 1. Ask for a comma-separated list of extra names and merge it into the current set.
//! 2. Show the merged list and ask `[y/N]` (default no).
//!
//! ## Architecture
//!
//! - `Operator`: the two questions the gate asks. `TerminalOperator` answers them
//!   with `dialoguer` prompts; tests supply scripted answers.
//! - `run_gate`: the gate logic over any `Operator`.
//! - `terminal_gate`: entry point for the command handler. Prompting needs a
//!   terminal, so when stdin is not one the gate reports `NoTerminal` and the
//!   run is cancelled without reading anything.
//!
use crate::core::config::IgnoreSet;
use crate::core::error::{Result, TreedocError};
use dialoguer::{Confirm, Input};
use is_terminal::IsTerminal;
use tracing::{debug, warn};

/// How the gate ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// The operator confirmed; traversal uses this set.
    Confirmed(IgnoreSet),
    /// The operator declined.
    Declined,
    /// Stdin is not a terminal, so no question could be asked.
    NoTerminal,
}

/// Answers the gate's questions.
pub trait Operator {
    /// One line of comma-separated extra names; empty for none.
    fn extra_ignores(&mut self) -> Result<String>;
    /// Shows `summary` and returns whether the operator wants to proceed.
    fn confirm(&mut self, summary: &str) -> Result<bool>;
}

/// `Operator` backed by `dialoguer` prompts on the terminal.
pub struct TerminalOperator;

impl Operator for TerminalOperator {
    fn extra_ignores(&mut self) -> Result<String> {
        let line = Input::<String>::new()
            .with_prompt("Additional names to ignore (comma-separated, blank for none)")
            .allow_empty(true)
            .interact_text()
            .map_err(TreedocError::Prompt)?;
        Ok(line)
    }

    fn confirm(&mut self, summary: &str) -> Result<bool> {
        println!("{}", summary);
        let proceed = Confirm::new()
            .with_prompt("Proceed?")
            .default(false)
            .interact()
            .map_err(TreedocError::Prompt)?;
        Ok(proceed)
    }
}

/// The merged ignore list as shown to the operator before confirmation.
pub fn ignore_summary(ignores: &IgnoreSet) -> String {
    let list = if ignores.is_empty() {
        "(none)".to_string()
    } else {
        ignores.display_list()
    };
    format!("The following names will be ignored:\n  {}", list)
}

/// Runs the gate against `operator`, starting from `ignores`.
///
/// Nothing is written to disk either way.
pub fn run_gate<O: Operator>(operator: &mut O, mut ignores: IgnoreSet) -> Result<GateOutcome> {
    // Merge the operator's extra names; blanks and whitespace are dropped by the set.
    let extra = operator.extra_ignores()?;
    ignores.extend_from_csv(&extra);
    debug!("Ignore set after operator input: {}", ignores.display_list());

    if operator.confirm(&ignore_summary(&ignores))? {
        Ok(GateOutcome::Confirmed(ignores))
    } else {
        Ok(GateOutcome::Declined)
    }
}

/// Runs the gate on the terminal, or reports `NoTerminal` when stdin is piped or redirected.
pub fn terminal_gate(ignores: IgnoreSet) -> Result<GateOutcome> {
    if !std::io::stdin().is_terminal() {
        warn!("--interactive was given but stdin is not a terminal.");
        return Ok(GateOutcome::NoTerminal);
    }
    run_gate(&mut TerminalOperator, ignores)
}
