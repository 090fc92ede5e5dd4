//! # treedoc Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the command
//! handlers:
//! - `config`: Ignore sets, ordering policy, marker constants and the resolved `RunConfig`
//! - `error`: The `TreedocError` taxonomy and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config::{IgnoreSet, RunConfig};
//! use crate::core::error::{Result, TreedocError};
//! ```
//!
pub mod config;
pub mod error;
