//! # treedoc Directory Tree Builder
//!
//! File: cli/src/commands/update/tree_builder.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! This module turns a directory into a tree diagram similar to the output of
//! the `tree` command-line utility, ready to be embedded in a markdown code
//! fence.
//!
//! ## Architecture
//!
//! - Recursive traversal that *returns* its lines (`Vec<TreeLine>`) instead of
//!   writing into a shared buffer, so each level can be tested in isolation
//! - Connectors (`├── `, `└── `) and indentation (`│   `, four spaces)
//! - Exact base-name filtering against an `IgnoreSet` at every depth
//! - Sibling ordering per `EntryOrder` (directories first, or interleaved)
//! - Directories rendered with a trailing `/`
//!
//! Any listing failure aborts the whole traversal; a tree with silent gaps is
//! never produced. Symlinked directories are followed without cycle detection.
//!
//! ## Usage
//!
//! ```rust
//! let tree = tree_to_string(Path::new("."), &IgnoreSet::with_defaults(), EntryOrder::DirsFirst)?;
//! ```
//!
//! Example output:
//!
//! ```text
//! ├── src/
//! │   ├── main.rs
//! │   └── lib.rs
//! ├── Cargo.toml
//! └── README.md
//! ```
//!
use crate::core::config::{validate_root, EntryOrder, IgnoreSet};
use crate::core::error::{Result, TreedocError};
use std::{
    cmp::Ordering,
    fmt, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

// --- Constants for Tree Drawing ---

/// Connector for intermediate items in a directory listing ("T" shape).
pub const TEE: &str = "├── ";
/// Connector for the last item in a directory listing ("L" shape).
pub const ELBOW: &str = "└── ";
/// Vertical line used for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Spacer used for indentation levels below a last item.
const SPACER: &str = "    ";

/// One entry read from a directory listing.
#[derive(Debug)]
struct DirEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

/// # Tree Line (`TreeLine`)
///
/// One rendered row of the diagram: the accumulated indentation, the connector
/// chosen by the entry's position among its siblings, and the entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Indentation inherited from the ancestors, built from `│   ` and four-space groups.
    pub prefix: String,
    /// `├── ` or `└── `.
    pub connector: &'static str,
    pub name: String,
    pub is_dir: bool,
}

impl TreeLine {
    /// Nesting depth, counting the root's children as depth 0.
    pub fn depth(&self) -> usize {
        // Every indentation group is four characters wide.
        self.prefix.chars().count() / 4
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.connector, self.name)?;
        if self.is_dir {
            write!(f, "/")?;
        }
        Ok(())
    }
}

/// # Build Directory Tree (`build_tree`)
///
/// Validates `root` and returns every non-ignored descendant as a `TreeLine`,
/// depth-first and pre-order. The root itself is not part of the output.
///
/// ## Errors
///
/// * `TreedocError::NotFound` / `NotADirectory` for an invalid root.
/// * `TreedocError::Permission` if any directory in the tree cannot be listed.
/// * `TreedocError::ReadDir` for other listing failures.
pub fn build_tree(root: &Path, ignores: &IgnoreSet, order: EntryOrder) -> Result<Vec<TreeLine>> {
    validate_root(root)?;
    debug!(
        "Building tree for '{}' ({} ignored names, order: {})",
        root.display(),
        ignores.len(),
        order
    );
    walk(root, "", ignores, order)
}

/// Joins rendered lines with `\n`. No trailing newline; an empty tree is `""`.
pub fn render_tree(lines: &[TreeLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `build_tree` followed by `render_tree`.
pub fn tree_to_string(root: &Path, ignores: &IgnoreSet, order: EntryOrder) -> Result<String> {
    let lines = build_tree(root, ignores, order)?;
    debug!(
        "Tree has {} entries, {} levels deep",
        lines.len(),
        lines.iter().map(|l| l.depth() + 1).max().unwrap_or(0)
    );
    Ok(render_tree(&lines))
}

/// Lists `dir` and recurses into its subdirectories, extending `prefix` by one level.
fn walk(dir: &Path, prefix: &str, ignores: &IgnoreSet, order: EntryOrder) -> Result<Vec<TreeLine>> {
    let entries = read_dir_entries(dir, ignores, order)?;
    let num_entries = entries.len();
    let mut lines = Vec::with_capacity(num_entries);

    for (index, entry) in entries.into_iter().enumerate() {
        // Only the final sibling gets the elbow; the order was fixed by `read_dir_entries`.
        let is_last_entry = index + 1 == num_entries;
        let connector = if is_last_entry { ELBOW } else { TEE };

        lines.push(TreeLine {
            prefix: prefix.to_string(),
            connector,
            name: entry.name,
            is_dir: entry.is_dir,
        });

        if entry.is_dir {
            // Below a last entry there is no sibling left to draw a pipe for.
            let child_prefix = format!("{}{}", prefix, if is_last_entry { SPACER } else { PIPE });
            // A failure anywhere below aborts the whole tree.
            lines.extend(walk(&entry.path, &child_prefix, ignores, order)?);
        }
    }

    Ok(lines)
}

/// Reads the entries of `dir`, drops ignored names, and orders the rest per `order`.
fn read_dir_entries(dir: &Path, ignores: &IgnoreSet, order: EntryOrder) -> Result<Vec<DirEntry>> {
    let listing_error = |e| TreedocError::from_listing(dir.to_path_buf(), e);

    let mut collected_entries = Vec::new();
    // Both opening the directory and reading each entry can fail mid-listing.
    for entry_result in fs::read_dir(dir).map_err(listing_error)? {
        let entry = entry_result.map_err(listing_error)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        // Exact base-name match, checked before any metadata call.
        if ignores.contains(&name) {
            debug!("Skipping ignored entry: {}", path.display());
            continue;
        }

        // `fs::metadata` follows symlinks, so a link to a directory is listed as one.
        let is_dir = match fs::metadata(&path) {
            Ok(md) => md.is_dir(),
            // Broken symlinks land here.
            Err(e) => {
                warn!(
                    "Could not get metadata for '{}': {}. Listing it as a file.",
                    path.display(),
                    e
                );
                false
            }
        };

        collected_entries.push(DirEntry { path, name, is_dir });
    }

    // `read_dir` order is platform-dependent; sort for reproducible output.
    sort_entries(&mut collected_entries, order);
    Ok(collected_entries)
}

fn sort_entries(entries: &mut [DirEntry], order: EntryOrder) {
    match order {
        EntryOrder::Interleaved => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        EntryOrder::DirsFirst => entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        }),
    }
}
