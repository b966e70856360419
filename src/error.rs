//! Error types for blockfix operations.
//!
//! This module provides the error hierarchy using `thiserror` for file
//! I/O, patch compilation and application, and CLI commands.

use thiserror::Error;

/// Result type alias for blockfix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Patch-related errors (pattern compilation, matching).
    #[error("patch error: {0}")]
    Patch(#[from] PatchError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// Errors raised while building or applying a patch.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The search pattern is not a valid regex.
    #[error("invalid pattern for patch '{name}': {reason}")]
    InvalidPattern {
        /// Patch name.
        name: String,
        /// Regex compiler message.
        reason: String,
    },

    /// No built-in patch with this name.
    #[error("unknown patch: {name}")]
    UnknownPatch {
        /// Requested patch name.
        name: String,
    },

    /// Strict mode only: the target block was not found.
    #[error("patch '{name}' did not match anything in {path}")]
    NoMatch {
        /// Patch name.
        name: String,
        /// Target file.
        path: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = IoError::FileNotFound {
            path: "/tmp/App.tsx".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/App.tsx");

        let err = IoError::WriteFailed {
            path: "/tmp/out".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_patch_error_display() {
        let err = PatchError::UnknownPatch {
            name: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "unknown patch: nope");

        let err = PatchError::NoMatch {
            name: "custom".to_string(),
            path: "App.tsx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "patch 'custom' did not match anything in App.tsx"
        );
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::MissingArgument("--replacement".to_string());
        assert_eq!(err.to_string(), "missing required argument: --replacement");
    }

    #[test]
    fn test_error_from_patch() {
        let err: Error = PatchError::UnknownPatch {
            name: "x".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Patch(_)));
        assert!(err.to_string().starts_with("patch error:"));
    }
}
