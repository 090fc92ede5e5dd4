//! # treedoc Error Types
//!
//! File: cli/src/core/error.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! This module defines the error taxonomy used throughout treedoc. Every error
//! is fatal: the run aborts, `main` reports the message on stderr and exits
//! with a non-zero status. Nothing is retried.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `TreedocError`: A custom error enum using `thiserror` for the specific failure kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so callers can attach context
//!
//! The error kinds cover:
//! - Missing or invalid target paths (`NotFound`, `NotADirectory`)
//! - Directory listing failures (`Permission`, `ReadDir`)
//! - Document write failures (`Write`)
//! - Operator I/O failures during the interactive prompt (`Prompt`)
//!
//! ## Examples
//!
//! ```rust
//! if !path.exists() {
//!     return Err(TreedocError::NotFound { path: path.to_path_buf() }.into());
//! }
//!
//! // Matching on a specific kind after propagation through anyhow
//! let is_permission = err
//!     .downcast_ref::<TreedocError>()
//!     .is_some_and(|e| matches!(e, TreedocError::Permission { .. }));
//! ```
//!
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the treedoc application.
#[derive(Error, Debug)]
pub enum TreedocError {
    #[error("Path '{}' does not exist.", path.display())]
    NotFound { path: PathBuf },

    #[error("Path '{}' is not a directory.", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Permission denied while listing '{}': {source}", path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read operator input: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl TreedocError {
    /// Classifies an I/O error raised while listing `path`.
    ///
    /// `PermissionDenied` becomes `Permission`, a vanished directory becomes
    /// `NotFound`, everything else is a generic `ReadDir`.
    pub fn from_listing(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => TreedocError::Permission { path, source },
            io::ErrorKind::NotFound => TreedocError::NotFound { path },
            _ => TreedocError::ReadDir { path, source },
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
