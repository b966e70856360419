//! # blockfix
//!
//! One-shot regex block patcher.
//!
//! blockfix reads a source file, finds a known multi-line block with a
//! regular expression, replaces the first match with a fixed literal
//! block, and writes the file back in place.
//!
//! ## Features
//!
//! - **Built-in patches**: named pattern/replacement pairs compiled into the binary
//! - **Literal replacement**: `$1` and `${name}` in the replacement are never expanded
//! - **Bounded substitution**: only the first match is replaced, extra matches are reported
//! - **Dry run and strict modes**: preview a change, or fail when nothing matches

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod patcher;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{BuiltinPatch, DEFAULT_PATCH, Patch, PatchOutcome};

// Re-export the file-level operation
pub use patcher::{PatchOptions, PatchReport, count_file_matches, patch_file};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
