//! # treedoc Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! This module centralizes the document I/O needed by the README updater:
//! reading an optional document and replacing a document's whole content.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing; fails if the path is a file.
//! - **`read_file_if_exists`**: Reads a file to a string, returning `None` when it does not exist.
//! - **`write_string_atomically`**: Writes the full content to a temporary file beside the
//!   target, then renames it over the target. Readers see either the old or the new document,
//!   never a truncated one. A symlinked target is resolved first so the link survives, and an
//!   existing target's permissions carry over to the new file. No cross-process locking is attempted.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let existing = io::read_file_if_exists(Path::new("README.md"))?;
//! io::write_string_atomically(Path::new("README.md"), "# Title\n")?;
//! ```
//!
use crate::core::error::{Result, TreedocError};
use anyhow::Context;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Missing directories are created recursively (like `mkdir -p`). If the path
/// exists but is not a directory, `TreedocError::NotADirectory` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(TreedocError::NotADirectory {
            path: path.to_path_buf()
        });
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file, or `None` if the file does not exist.
///
/// # Errors
///
/// Any read failure other than "not found" (permissions, invalid UTF-8, ...)
/// is returned with context naming the file.
pub fn read_file_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No existing file at {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}

/// Replaces the content of `path` with `content` in one step.
///
/// The content is written to a temporary file in the target's directory and
/// renamed over the target. The parent directory is created if needed.
///
/// When `path` already exists it is resolved through any symlinks: the file
/// the link points at is replaced and the link itself is left alone. The
/// existing file's permissions are applied to the new content before the rename.
///
/// # Errors
///
/// Every failure after the parent directory is resolved surfaces as
/// `TreedocError::Write` naming `path`.
pub fn write_string_atomically(path: &Path, content: &str) -> Result<()> {
    let to_write_error = |source: std::io::Error| TreedocError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Rename over the real file, not over a symlink pointing at it.
    let (target, existing) = match fs::canonicalize(path) {
        Ok(resolved) => {
            let metadata = fs::metadata(&resolved).map_err(to_write_error)?;
            (resolved, Some(metadata))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => (path.to_path_buf(), None),
        Err(e) => return Err(to_write_error(e).into()),
    };
    if target != path {
        debug!("Resolved {:?} to {:?}", path, target);
    }

    let parent: PathBuf = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_dir_exists(&parent)?;

    // The temp file must live in the same directory for the rename to be atomic.
    let mut temp = NamedTempFile::new_in(&parent).map_err(to_write_error)?;
    temp.write_all(content.as_bytes()).map_err(to_write_error)?;
    temp.flush().map_err(to_write_error)?;

    // NamedTempFile is created 0600; keep the mode the document already had.
    if let Some(metadata) = existing {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(to_write_error)?;
    }

    temp.persist(&target).map_err(|e| to_write_error(e.error))?;

    info!("Wrote {} bytes to {:?}", content.len(), target);
    Ok(())
}
