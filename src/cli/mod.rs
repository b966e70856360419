//! CLI layer for blockfix.
//!
//! Provides the command-line interface using clap, with commands for
//! applying, checking, and listing patches.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands, TargetArgs};
