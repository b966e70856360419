//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default target file when none is given.
pub const DEFAULT_TARGET: &str = "App.tsx";

/// Environment variable overriding the target file.
pub const TARGET_ENV: &str = "BLOCKFIX_TARGET";

/// blockfix: replace a known code block in a source file.
///
/// Run without a subcommand to apply the default built-in patch to
/// `App.tsx` in the current directory.
#[derive(Parser, Debug)]
#[command(name = "blockfix")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute (defaults to `apply`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the first match of the patch in the target file.
    Apply {
        /// Target file and patch selection.
        #[command(flatten)]
        target: TargetArgs,

        /// Report what would change without writing the file.
        #[arg(long)]
        dry_run: bool,

        /// Fail if the target block is not found.
        #[arg(long)]
        strict: bool,
    },

    /// Count matches of the patch in the target file without writing.
    Check {
        /// Target file and patch selection.
        #[command(flatten)]
        target: TargetArgs,
    },

    /// List built-in patches.
    #[command(name = "list", alias = "ls")]
    List,
}

/// Target file plus the patch to apply to it.
#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    /// File to patch. An empty value means the default target.
    #[arg(env = TARGET_ENV, value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub file: Option<PathBuf>,

    /// Built-in patch name.
    #[arg(short, long, conflicts_with = "pattern")]
    pub patch: Option<String>,

    /// Custom search pattern (regex).
    #[arg(long)]
    pub pattern: Option<String>,

    /// Literal replacement for a custom pattern.
    #[arg(long, requires = "pattern", conflicts_with = "replacement_file")]
    pub replacement: Option<String>,

    /// File holding the literal replacement for a custom pattern.
    #[arg(long, requires = "pattern")]
    pub replacement_file: Option<PathBuf>,
}

impl TargetArgs {
    /// Arguments used when no subcommand is given: the default patch on
    /// the target named by `BLOCKFIX_TARGET`, if set.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            file: std::env::var_os(TARGET_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            ..Self::default()
        }
    }

    /// Returns the target path, using the default if not specified or empty.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.file
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
    }
}
