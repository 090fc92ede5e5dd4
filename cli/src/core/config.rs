//! # treedoc Run Configuration
//!
//! File: cli/src/core/config.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! treedoc reads no configuration file and no application environment
//! variables. Everything a run needs is resolved from command-line arguments
//! into a `RunConfig`, which is validated before any output is produced.
//!
//! ## Architecture
//!
//! - `DEFAULT_IGNORES`: names excluded from every traversal unless
//!   `--no-default-ignores` is given.
//! - `IgnoreSet`: literal base names (not paths, not globs) excluded at every depth.
//! - `EntryOrder`: the connector/ordering policy for sibling entries.
//! - `START_MARKER` / `END_MARKER`: the managed-region delimiters.
//! - `RunConfig`: the resolved settings of one invocation.
//!
//! ## Examples
//!
//! ```rust
//! let mut ignores = IgnoreSet::with_defaults();
//! ignores.extend_from_csv("target, coverage");
//! assert!(ignores.contains("node_modules"));
//! assert!(ignores.contains("coverage"));
//! ```
//!
use crate::core::error::{Result, TreedocError};
use clap::ValueEnum;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names excluded from traversal by default: version control, framework build
/// cache, dependency directories (current and legacy), logs, build output,
/// Python bytecode cache and OS metadata.
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    ".next",
    "node_modules",
    "bower_components",
    "logs",
    "dist",
    "__pycache__",
    ".DS_Store",
];

/// Opening line of the managed region inside the README.
pub const START_MARKER: &str = "<!-- START OF DIRECTORY STRUCTURE -->";
/// Closing line of the managed region inside the README.
pub const END_MARKER: &str = "<!-- END OF DIRECTORY STRUCTURE -->";
/// Heading written above the managed region when treedoc adds it to a document.
pub const SECTION_HEADING: &str = "# Project Directory Structure";
/// README file name used when `--readme` is not given.
pub const DEFAULT_README: &str = "README.md";

/// A set of literal entry names excluded from traversal at every depth.
///
/// Backed by a `BTreeSet` so `display_list` is stable for the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set seeded with `DEFAULT_IGNORES`.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.extend(DEFAULT_IGNORES.iter().copied());
        set
    }

    /// Adds one name. Surrounding whitespace is trimmed; blank names are dropped.
    pub fn insert(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.names.insert(trimmed.to_string())
    }

    /// Adds every name yielded by `names`.
    pub fn extend<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.insert(name);
        }
    }

    /// Adds the names of a comma-separated operator list such as `"target, .idea"`.
    pub fn extend_from_csv(&mut self, line: &str) {
        self.extend(line.split(','));
    }

    /// Exact match against a base name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The names joined with `", "`, sorted.
    pub fn display_list(&self) -> String {
        self.names
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Ordering policy for the entries of one directory.
///
/// The connector of each entry depends on its position in the ordered list,
/// so this is the only externally visible formatting choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EntryOrder {
    /// All directories (by name), then all files (by name).
    #[default]
    DirsFirst,
    /// Directories and files mixed, by name.
    Interleaved,
}

impl fmt::Display for EntryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryOrder::DirsFirst => write!(f, "dirs-first"),
            EntryOrder::Interleaved => write!(f, "interleaved"),
        }
    }
}

/// Resolved settings for a single treedoc invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory whose structure is documented.
    pub root: PathBuf,
    /// Document holding the managed region.
    pub readme: PathBuf,
    pub ignores: IgnoreSet,
    pub order: EntryOrder,
    /// Print the tree to stdout instead of updating the document.
    pub print_only: bool,
    /// Ask the operator for extra ignores and a confirmation first.
    pub interactive: bool,
}

impl RunConfig {
    /// Builds a config for `root`, defaulting the README to `<root>/README.md`.
    pub fn new(root: impl Into<PathBuf>, readme: Option<PathBuf>) -> Self {
        let root = root.into();
        let readme = readme.unwrap_or_else(|| root.join(DEFAULT_README));
        Self {
            root,
            readme,
            ignores: IgnoreSet::with_defaults(),
            order: EntryOrder::default(),
            print_only: false,
            interactive: false,
        }
    }

    /// Checks that the root exists and is a directory.
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.root)?;
        debug!("Validated run configuration: {:?}", self);
        Ok(())
    }
}

/// Fails with `NotFound` or `NotADirectory` unless `root` is an existing directory.
pub fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(TreedocError::NotFound {
            path: root.to_path_buf(),
        }
        .into());
    }
    if !root.is_dir() {
        return Err(TreedocError::NotADirectory {
            path: root.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
