//! Core patch types.
//!
//! A [`Patch`] is the only domain value: a compiled search pattern plus
//! the literal block that replaces its first match.

pub mod builtin;
pub mod patch;

pub use builtin::{BuiltinPatch, DEFAULT_PATCH};
pub use patch::{Patch, PatchOutcome};
