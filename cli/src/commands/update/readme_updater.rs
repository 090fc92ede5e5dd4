//! # treedoc README Updater
//!
//! File: cli/src/commands/update/readme_updater.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! Keeps a fenced tree diagram inside a markdown document between two marker
//! lines. The span between the markers (the managed region) is owned by
//! treedoc and rewritten on every run; everything outside it is preserved
//! byte for byte.
//!
//! ~~~text
//! <!-- START OF DIRECTORY STRUCTURE -->
//! ```
//! ├── src/
//! └── Cargo.toml
//! ```
//! <!-- END OF DIRECTORY STRUCTURE -->
//! ~~~
//!
//! ## Architecture
//!
//! - `splice_managed_region`: pure text transformation returning the new document and
//!   a `SpliceOutcome` (replaced in place, appended as a new section, or created).
//! - `update_readme`: reads the document, splices, and writes the result atomically.
//!
//! Missing markers are not an error: the section is appended so a first run
//! initializes the document.
//!
use crate::common::fs::io;
use crate::core::config::{END_MARKER, SECTION_HEADING, START_MARKER};
use crate::core::error::Result;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Which of the splice paths produced the new document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// Both markers were found; the region between them was replaced.
    Replaced,
    /// The document existed without a marker pair; a new section was appended.
    Appended,
    /// The document did not exist and was created with the section.
    Created,
}

impl fmt::Display for SpliceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SpliceOutcome::Replaced => "updated",
            SpliceOutcome::Appended => "appended",
            SpliceOutcome::Created => "created",
        };
        write!(f, "{}", text)
    }
}

/// The managed region for `tree`, from the start marker through the end marker.
pub fn managed_block(tree: &str) -> String {
    format!("{}\n```\n{}\n```\n{}", START_MARKER, tree, END_MARKER)
}

/// Byte range of the managed region (start marker through end marker), if any.
///
/// The end marker only counts when it follows the start marker; a stray end
/// marker earlier in the document is left alone.
fn find_managed_region(text: &str) -> Option<(usize, usize)> {
    let start = text.find(START_MARKER)?;
    let after_start = start + START_MARKER.len();
    let end = after_start + text[after_start..].find(END_MARKER)? + END_MARKER.len();
    Some((start, end))
}

/// Computes the new document text for `tree`.
///
/// `existing` is the current document content, or `None` if there is no document.
pub fn splice_managed_region(existing: Option<&str>, tree: &str) -> (String, SpliceOutcome) {
    let block = managed_block(tree);
    match existing {
        // No document yet: heading, blank line, block.
        None => (
            format!("{}\n\n{}\n", SECTION_HEADING, block),
            SpliceOutcome::Created,
        ),
        Some(text) => match find_managed_region(text) {
            // Swap only the marker-to-marker span; bytes on either side are copied as-is.
            Some((start, end)) => {
                let mut updated = String::with_capacity(text.len() + block.len());
                updated.push_str(&text[..start]);
                updated.push_str(&block);
                updated.push_str(&text[end..]);
                (updated, SpliceOutcome::Replaced)
            }
            // No marker pair (or only a stray end marker): append a fresh section.
            // The next run finds these markers and replaces in place.
            None => (
                format!("{}\n{}\n{}\n", text, SECTION_HEADING, block),
                SpliceOutcome::Appended,
            ),
        },
    }
}

/// Writes `tree` into the managed region of the document at `path`.
///
/// The whole document is replaced in one step; a failed write leaves the
/// previous content untouched.
pub fn update_readme(path: &Path, tree: &str) -> Result<SpliceOutcome> {
    let existing = io::read_file_if_exists(path)?;
    let (content, outcome) = splice_managed_region(existing.as_deref(), tree);
    debug!("Managed region of {:?}: {:?}", path, outcome);
    io::write_string_atomically(path, &content)?;
    Ok(outcome)
}
