//! # treedoc Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! Filesystem helpers shared by the commands. Directory listing for the tree
//! lives with the tree builder; this module covers document I/O.
//!
//! - **`io`**: Reading optional files, creating directories, and atomic whole-file writes.
//!

/// Contains document I/O (`read_file_if_exists`, `write_string_atomically`, `ensure_dir_exists`).
pub mod io;
