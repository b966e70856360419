//! I/O utilities for blockfix.
//!
//! Reads a target file fully into memory as text and writes the
//! patched content back over it.

pub mod reader;

pub use reader::{FileReader, read_file, write_file};
