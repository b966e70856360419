//! Load, patch, and persist a single file.

use crate::core::{Patch, PatchOutcome};
use crate::error::{PatchError, Result};
use crate::io::{read_file, write_file};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Options controlling [`patch_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Compute the result without writing the file.
    pub dry_run: bool,
    /// Fail with [`PatchError::NoMatch`] when the pattern is not found.
    pub strict: bool,
}

/// What happened to a patched file.
#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    /// Target file path.
    pub path: String,
    /// Patch name.
    pub patch: String,
    /// Match/replace outcome.
    pub outcome: PatchOutcome,
    /// Whether the file was written back.
    pub written: bool,
    /// Size in bytes before patching.
    pub size_before: usize,
    /// Size in bytes after patching.
    pub size_after: usize,
}

/// Replaces the first match of `patch` in the file at `path`.
///
/// Without `strict`, a file with no match is written back unchanged.
///
/// # Errors
///
/// Returns an error if the file is missing, is not UTF-8, cannot be
/// written, or (in strict mode) does not contain the target block.
pub fn patch_file<P: AsRef<Path>>(
    path: P,
    patch: &Patch,
    options: &PatchOptions,
) -> Result<PatchReport> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy().to_string();

    let content = read_file(path)?;
    debug!(path = %path_str, bytes = content.len(), "loaded target");

    let (patched, outcome) = patch.apply(&content);

    match outcome {
        PatchOutcome::Replaced {
            offset,
            match_count,
            ..
        } => {
            info!(path = %path_str, patch = patch.name(), offset, "replaced target block");
            if match_count > 1 {
                warn!(
                    path = %path_str,
                    patch = patch.name(),
                    match_count,
                    "pattern matched more than once; only the first match was replaced"
                );
            }
        }
        PatchOutcome::NoMatch => {
            if options.strict {
                return Err(PatchError::NoMatch {
                    name: patch.name().to_string(),
                    path: path_str,
                }
                .into());
            }
            warn!(path = %path_str, patch = patch.name(), "target block not found; content unchanged");
        }
    }

    let written = !options.dry_run;
    if written {
        write_file(path, &patched)?;
        debug!(path = %path_str, bytes = patched.len(), "wrote target");
    }

    Ok(PatchReport {
        path: path_str,
        patch: patch.name().to_string(),
        outcome,
        written,
        size_before: content.len(),
        size_after: patched.len(),
    })
}

/// Counts matches of `patch` in the file at `path` without modifying it.
///
/// # Errors
///
/// Returns an error if the file is missing or is not UTF-8.
pub fn count_file_matches<P: AsRef<Path>>(path: P, patch: &Patch) -> Result<usize> {
    let content = read_file(path)?;
    Ok(patch.count_matches(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_temp(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("App.tsx");
        std::fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_patch_file_replaces() {
        let (_temp, path) = write_temp("a OLD b");
        let patch = Patch::new("p", "OLD", "NEW").unwrap();

        let report = patch_file(&path, &patch, &PatchOptions::default()).unwrap();

        assert!(report.written);
        assert!(report.outcome.is_replaced());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a NEW b");
    }

    #[test]
    fn test_patch_file_keeps_crlf_outside_block() {
        let (_temp, path) = write_temp("line1\r\nOLD\r\nline3\r\n");
        let patch = Patch::new("p", "OLD", "NEW\nBLOCK").unwrap();

        patch_file(&path, &patch, &PatchOptions::default()).unwrap();

        assert_eq!(
            std::fs::read(&path).unwrap(),
            b"line1\r\nNEW\nBLOCK\r\nline3\r\n"
        );
    }

    #[test]
    fn test_patch_file_no_match_writes_unchanged() {
        let (_temp, path) = write_temp("nothing here\r\n");
        let patch = Patch::new("p", "OLD", "NEW").unwrap();

        let report = patch_file(&path, &patch, &PatchOptions::default()).unwrap();

        assert!(report.written);
        assert_eq!(report.outcome, PatchOutcome::NoMatch);
        assert_eq!(std::fs::read(&path).unwrap(), b"nothing here\r\n");
    }

    #[test]
    fn test_patch_file_strict_no_match() {
        let (_temp, path) = write_temp("nothing here");
        let patch = Patch::new("p", "OLD", "NEW").unwrap();
        let options = PatchOptions {
            strict: true,
            ..PatchOptions::default()
        };

        let result = patch_file(&path, &patch, &options);
        assert!(matches!(
            result,
            Err(crate::Error::Patch(PatchError::NoMatch { .. }))
        ));
    }

    #[test]
    fn test_patch_file_dry_run() {
        let (_temp, path) = write_temp("a OLD b");
        let patch = Patch::new("p", "OLD", "NEWER").unwrap();
        let options = PatchOptions {
            dry_run: true,
            ..PatchOptions::default()
        };

        let report = patch_file(&path, &patch, &options).unwrap();

        assert!(!report.written);
        assert_eq!(report.size_before, 7);
        assert_eq!(report.size_after, 9);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a OLD b");
    }

    #[test]
    fn test_patch_file_missing() {
        let patch = Patch::new("p", "OLD", "NEW").unwrap();
        let result = patch_file("/nonexistent/App.tsx", &patch, &PatchOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_count_file_matches() {
        let (_temp, path) = write_temp("OLD OLD");
        let patch = Patch::new("p", "OLD", "NEW").unwrap();
        assert_eq!(count_file_matches(&path, &patch).unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "OLD OLD");
    }
}
