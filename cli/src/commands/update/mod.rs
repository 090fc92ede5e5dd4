//! # treedoc Update Command
//!
//! File: cli/src/commands/update/mod.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! The single treedoc command: document a directory's structure inside its
//! README. The flow is
//!
//! 1. Resolve and validate the `RunConfig` from the parsed arguments.
//! 2. Optionally run the interactive ignore-list gate (`--interactive`).
//! 3. Build the tree (`tree_builder`).
//! 4. Print it (`--print`) or splice it into the document (`readme_updater`).
//!
//! ## Examples
//!
//! ```bash
//! # Update ./README.md with the structure of the current directory
//! treedoc
//!
//! # Document another project, ignoring build output, directories interleaved with files
//! treedoc ../service --ignore target,coverage --order interleaved
//!
//! # Preview without touching any file
//! treedoc --print
//! ```
//!
use crate::common::ui::prompts::{self, GateOutcome};
use crate::core::config::{EntryOrder, IgnoreSet, RunConfig};
use crate::core::error::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, info};

/// Builds the tree diagram from the filesystem.
pub mod tree_builder;
/// Splices the diagram into the document's managed region.
pub mod readme_updater;

/// # Update Arguments (`UpdateArgs`)
///
/// Arguments accepted by `treedoc [PATH]`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Directory whose structure is documented.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Document to update (defaults to README.md inside PATH).
    #[arg(short, long, value_name = "FILE")]
    pub readme: Option<PathBuf>,

    /// Extra names to ignore, comma-separated. May be repeated.
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Do not ignore the built-in names (.git, node_modules, dist, ...).
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Ordering of entries within each directory.
    #[arg(long, value_enum, default_value_t = EntryOrder::DirsFirst)]
    pub order: EntryOrder,

    /// Ask for extra ignore names and a confirmation before running.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the tree to stdout instead of updating the document.
    #[arg(short, long, conflicts_with = "readme")]
    pub print: bool,
}

impl UpdateArgs {
    /// Resolves the arguments into a `RunConfig`. Validation happens separately.
    pub fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new(self.path, self.readme);
        config.ignores = if self.no_default_ignores {
            IgnoreSet::new()
        } else {
            IgnoreSet::with_defaults()
        };
        config.ignores.extend(self.ignore.iter().map(String::as_str));
        config.order = self.order;
        config.print_only = self.print;
        config.interactive = self.interactive;
        config
    }
}

/// # Handle Update Command (`handle_update`)
///
/// Entry point called from `main`. Validates the target before prompting so a
/// bad path fails fast, then runs the optional gate and the update itself.
/// A declined confirmation is a successful run with no side effects, and so is
/// `--interactive` without a terminal on stdin: nothing can be asked, so nothing runs.
pub fn handle_update(args: UpdateArgs) -> Result<()> {
    let mut config = args.into_config();
    // Fail on a bad path before asking the operator anything.
    config.validate()?;

    if config.interactive {
        match prompts::terminal_gate(config.ignores.clone())? {
            GateOutcome::Confirmed(ignores) => config.ignores = ignores,
            GateOutcome::Declined => {
                info!("Operator declined; nothing was written.");
                println!("Operation cancelled.");
                return Ok(());
            }
            GateOutcome::NoTerminal => {
                println!("Interactive mode needs a terminal on stdin. Operation cancelled.");
                return Ok(());
            }
        }
    }

    run(&config)
}

/// Builds the tree for `config` and prints it or writes it to the document.
pub fn run(config: &RunConfig) -> Result<()> {
    let tree = tree_builder::tree_to_string(&config.root, &config.ignores, config.order)?;
    debug!("Rendered tree with {} lines", tree.lines().count());

    if config.print_only {
        println!("{}", tree);
        return Ok(());
    }

    // Only the managed region changes; the rest of the document is kept byte for byte.
    let outcome = readme_updater::update_readme(&config.readme, &tree)?;
    println!(
        "Directory structure {} in {}",
        outcome,
        config.readme.display()
    );
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{END_MARKER, START_MARKER};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: UpdateArgs,
    }

    fn parse(argv: &[&str]) -> UpdateArgs {
        let mut full = vec!["treedoc"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).expect("arguments should parse").args
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(args.readme.is_none());
        assert_eq!(args.order, EntryOrder::DirsFirst);

        let config = args.into_config();
        assert_eq!(config.readme, PathBuf::from(".").join("README.md"));
        assert!(config.ignores.contains("node_modules"));
        assert!(!config.print_only);
        assert!(!config.interactive);
    }

    #[test]
    fn test_ignore_list_and_order_parse() {
        let config = parse(&[
            "proj",
            "--ignore",
            "target,coverage",
            "--ignore",
            ".idea",
            "--no-default-ignores",
            "--order",
            "interleaved",
        ])
        .into_config();
        assert_eq!(config.root, PathBuf::from("proj"));
        assert_eq!(config.ignores.len(), 3);
        assert!(config.ignores.contains("coverage"));
        assert!(!config.ignores.contains(".git"));
        assert_eq!(config.order, EntryOrder::Interleaved);
    }

    #[test]
    fn test_print_conflicts_with_readme() {
        let result = TestCli::try_parse_from(["treedoc", "--print", "--readme", "X.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_writes_readme() -> Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::create_dir(root.join("src"))?;
        fs::write(root.join("src/a.js"), "")?;
        fs::create_dir(root.join("node_modules"))?;
        fs::write(root.join("readme-note.txt"), "")?;

        let config = RunConfig::new(root, None);
        run(&config)?;

        let readme = fs::read_to_string(root.join("README.md"))?;
        let expected = format!(
            "{}\n```\n├── src/\n│   └── a.js\n└── readme-note.txt\n```\n{}",
            START_MARKER, END_MARKER
        );
        assert!(readme.contains(&expected), "README was:\n{}", readme);
        Ok(())
    }

    #[test]
    fn test_print_only_leaves_disk_untouched() -> Result<()> {
        let temp_dir = tempdir()?;
        let root = temp_dir.path();
        fs::write(root.join("file.txt"), "")?;

        let mut config = RunConfig::new(root, None);
        config.print_only = true;
        run(&config)?;

        assert!(!root.join("README.md").exists());
        Ok(())
    }

    #[test]
    fn test_missing_root_fails_validation() {
        let args = parse(&["/path/that/absolutely/does/not/exist"]);
        let err = handle_update(args).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
