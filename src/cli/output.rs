//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{BuiltinPatch, PatchOutcome};
use crate::error::Error;
use crate::patcher::PatchReport;
use serde::Serialize;
use std::fmt::Write;

/// Confirmation line printed after `apply` in text mode.
pub const APPLY_CONFIRMATION: &str = "Fixed!";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the result of `apply`.
///
/// Text mode prints the confirmation once the file has been written,
/// whether or not a block was replaced; the no-match case is surfaced as
/// a log warning and in the verbose details. A dry run prints a preview
/// line instead.
#[must_use]
pub fn format_apply(report: &PatchReport, verbose: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = if report.written {
                format!("{APPLY_CONFIRMATION}\n")
            } else {
                format_dry_run(report.outcome)
            };
            if verbose {
                output.push_str(&format_report_details(report));
            }
            output
        }
        OutputFormat::Json => format_json(report),
    }
}

fn format_dry_run(outcome: PatchOutcome) -> String {
    match outcome {
        PatchOutcome::Replaced {
            offset,
            removed_len,
            inserted_len,
            ..
        } => format!(
            "Dry run: would replace {removed_len} bytes at offset {offset} with {inserted_len} bytes\n"
        ),
        PatchOutcome::NoMatch => "Dry run: no match\n".to_string(),
    }
}

fn format_report_details(report: &PatchReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "  File:      {}", report.path);
    let _ = writeln!(output, "  Patch:     {}", report.patch);
    match report.outcome {
        PatchOutcome::Replaced {
            offset,
            removed_len,
            inserted_len,
            match_count,
        } => {
            let _ = writeln!(
                output,
                "  Replaced:  {removed_len} bytes at offset {offset} with {inserted_len} bytes"
            );
            let _ = writeln!(output, "  Matches:   {match_count}");
        }
        PatchOutcome::NoMatch => {
            output.push_str("  Replaced:  nothing (no match)\n");
        }
    }
    let _ = writeln!(
        output,
        "  Size:      {} -> {} bytes",
        report.size_before, report.size_after
    );
    let _ = writeln!(
        output,
        "  Written:   {}",
        if report.written { "yes" } else { "no (dry run)" }
    );
    output
}

/// Result of `check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Target file path.
    pub path: String,
    /// Patch name.
    pub patch: String,
    /// Number of non-overlapping matches.
    pub match_count: usize,
}

/// Formats the result of `check`.
#[must_use]
pub fn format_check(result: &CheckResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let verdict = match result.match_count {
                0 => "no match, apply would leave the file unchanged".to_string(),
                1 => "1 match".to_string(),
                n => format!("{n} matches, apply replaces only the first"),
            };
            format!("{}: {} ({verdict})\n", result.path, result.patch)
        }
        OutputFormat::Json => format_json(result),
    }
}

/// Formats the built-in patch list.
#[must_use]
pub fn format_patch_list(patches: &[BuiltinPatch], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if patches.is_empty() {
                return "No built-in patches.\n".to_string();
            }
            let mut output = String::new();
            let _ = writeln!(output, "{:<32} {:<10} Description", "Name", "Target");
            output.push_str(&"-".repeat(70));
            output.push('\n');
            for patch in patches {
                let _ = writeln!(
                    output,
                    "{:<32} {:<10} {}",
                    patch.name, patch.default_target, patch.description
                );
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct PatchInfo<'a> {
                name: &'a str,
                description: &'a str,
                default_target: &'a str,
                pattern: &'a str,
            }
            let infos: Vec<PatchInfo<'_>> = patches
                .iter()
                .map(|p| PatchInfo {
                    name: p.name,
                    description: p.description,
                    default_target: p.default_target,
                    pattern: p.pattern,
                })
                .collect();
            format_json(&infos)
        }
    }
}

/// Formats an error for output.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}
