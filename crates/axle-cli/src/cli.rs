//! CLI argument definitions for Axle.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "axle",
    version,
    about = "Resolve declarative build-variant configuration",
    long_about = "Axle merges configuration axes from literals, plugin-supplied providers and \
                  per-variant overrides into a resolved build descriptor for a packaging tool."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to Axle.toml (default: nearest one at or above the current directory)
    #[arg(long, global = true, env = "AXLE_MANIFEST")]
    pub manifest: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved build descriptor
    Resolve {
        /// Resolve a single variant
        #[arg(long)]
        variant: Option<String>,
        /// Output format: json, toml
        #[arg(short, long)]
        format: Option<String>,
        /// Show each axis with the declaration it came from
        #[arg(long)]
        explain: bool,
    },

    /// List build variants and their inheritance chains
    Variants,

    /// Show merged dependencies grouped by scope
    Deps {
        /// Build variant (default: debug)
        #[arg(long)]
        variant: Option<String>,
    },

    /// Validate the declaration and report warnings
    Check,
}

/// Parse CLI arguments from the process environment.
pub fn parse() -> Cli {
    Cli::parse()
}
