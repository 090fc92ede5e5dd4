//! # treedoc Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: treedoc contributors
//!
//! ## Overview
//!
//! This file serves as the main entry point for the treedoc CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Dispatching to the update command and reporting its errors
//!
//! ## Examples
//!
//! ```bash
//! # Document the current directory in ./README.md
//! treedoc
//!
//! # Interactive run with debug logging
//! treedoc -vv --interactive path/to/project
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (or `RUST_LOG`)
//! 3. Run the update command
//! 4. Print any error to stderr and exit with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (update)
mod common; // Shared utilities (fs, ui)
mod core; // Core infrastructure (errors, config)

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "treedoc",
    about = "Generate a directory tree and keep it up to date in a README",
    long_about = "Walks a directory, renders its structure as a tree diagram, and writes it\n\
                  between marker comments in a README. The section is appended on first run.",
    version
)]
struct Cli {
    #[command(flatten)]
    update: commands::update::UpdateArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::update::handle_update(cli.update) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
