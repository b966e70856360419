//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    CheckResult, OutputFormat, format_apply, format_check, format_patch_list,
};
use crate::cli::parser::{Cli, Commands, TargetArgs};
use crate::core::{DEFAULT_PATCH, Patch, builtin};
use crate::error::{CommandError, Result};
use crate::io::read_file;
use crate::patcher::{PatchOptions, count_file_matches, patch_file};
use tracing::debug;

/// Name given to a patch built from `--pattern`.
const CUSTOM_PATCH_NAME: &str = "custom";

/// Executes the CLI command.
///
/// With no subcommand, applies the default patch to the default target.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        None => cmd_apply(&TargetArgs::from_env(), false, false, cli.verbose, format),
        Some(Commands::Apply {
            target,
            dry_run,
            strict,
        }) => cmd_apply(target, *dry_run, *strict, cli.verbose, format),
        Some(Commands::Check { target }) => cmd_check(target, format),
        Some(Commands::List) => Ok(format_patch_list(builtin::all(), format)),
    }
}

fn cmd_apply(
    target: &TargetArgs,
    dry_run: bool,
    strict: bool,
    verbose: bool,
    format: OutputFormat,
) -> Result<String> {
    let patch = resolve_patch(target)?;
    let path = target.target_path();
    debug!(path = %path.display(), patch = patch.name(), dry_run, strict, "applying patch");

    let options = PatchOptions { dry_run, strict };
    let report = patch_file(&path, &patch, &options)?;
    Ok(format_apply(&report, verbose, format))
}

fn cmd_check(target: &TargetArgs, format: OutputFormat) -> Result<String> {
    let patch = resolve_patch(target)?;
    let path = target.target_path();
    let match_count = count_file_matches(&path, &patch)?;

    let result = CheckResult {
        path: path.to_string_lossy().to_string(),
        patch: patch.name().to_string(),
        match_count,
    };
    Ok(format_check(&result, format))
}

/// Builds the patch selected by the arguments: a custom pattern, a named
/// built-in, or the default built-in.
fn resolve_patch(target: &TargetArgs) -> Result<Patch> {
    let Some(pattern) = target.pattern.as_deref() else {
        return builtin::compile(target.patch.as_deref().unwrap_or(DEFAULT_PATCH));
    };

    let replacement = match (&target.replacement, &target.replacement_file) {
        (Some(text), None) => text.clone(),
        (None, Some(file)) => read_file(file)?,
        (Some(_), Some(_)) => {
            return Err(CommandError::InvalidArgument(
                "use either --replacement or --replacement-file, not both".to_string(),
            )
            .into());
        }
        (None, None) => {
            return Err(CommandError::MissingArgument(
                "--replacement or --replacement-file".to_string(),
            )
            .into());
        }
    };

    Patch::new(CUSTOM_PATCH_NAME, pattern, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::error::PatchError;
    use tempfile::TempDir;

    fn args(file: &std::path::Path) -> TargetArgs {
        TargetArgs {
            file: Some(file.to_path_buf()),
            ..TargetArgs::default()
        }
    }

    #[test]
    fn test_resolve_default_patch() {
        let patch = resolve_patch(&TargetArgs::default()).unwrap();
        assert_eq!(patch.name(), DEFAULT_PATCH);
    }

    #[test]
    fn test_resolve_unknown_patch() {
        let target = TargetArgs {
            patch: Some("nope".to_string()),
            ..TargetArgs::default()
        };
        assert!(matches!(
            resolve_patch(&target),
            Err(Error::Patch(PatchError::UnknownPatch { .. }))
        ));
    }

    #[test]
    fn test_resolve_custom_requires_replacement() {
        let target = TargetArgs {
            pattern: Some("x".to_string()),
            ..TargetArgs::default()
        };
        assert!(matches!(
            resolve_patch(&target),
            Err(Error::Command(CommandError::MissingArgument(_)))
        ));
    }

    #[test]
    fn test_resolve_custom_replacement_file() {
        let temp_dir = TempDir::new().unwrap();
        let replacement = temp_dir.path().join("block.txt");
        std::fs::write(&replacement, "NEW ${x}").unwrap();

        let target = TargetArgs {
            pattern: Some("OLD".to_string()),
            replacement_file: Some(replacement),
            ..TargetArgs::default()
        };
        let patch = resolve_patch(&target).unwrap();
        assert_eq!(patch.name(), CUSTOM_PATCH_NAME);
        assert_eq!(patch.replacement(), "NEW ${x}");
    }

    #[test]
    fn test_cmd_apply_custom() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("App.tsx");
        std::fs::write(&file, "const a = OLD;\n").unwrap();

        let target = TargetArgs {
            pattern: Some("OLD".to_string()),
            replacement: Some("NEW".to_string()),
            ..args(&file)
        };
        let output = cmd_apply(&target, false, false, false, OutputFormat::Text).unwrap();

        assert_eq!(output, "Fixed!\n");
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "const a = NEW;\n");
    }

    #[test]
    fn test_cmd_check_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("App.tsx");
        std::fs::write(&file, "OLD OLD").unwrap();

        let target = TargetArgs {
            pattern: Some("OLD".to_string()),
            replacement: Some("NEW".to_string()),
            ..args(&file)
        };
        let output = cmd_check(&target, OutputFormat::Json).unwrap();

        assert!(output.contains("\"match_count\": 2"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "OLD OLD");
    }
}
