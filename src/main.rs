//! Binary entry point for blockfix.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use blockfix::cli::output::{OutputFormat, format_error};
use blockfix::cli::{Cli, execute};
use blockfix::logging;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let format = OutputFormat::parse(&cli.format);

    match execute(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                // Handle broken pipe gracefully (e.g., when piped to `head` or `jq`)
                if let Err(e) = write!(io::stdout(), "{output}")
                    && e.kind() != io::ErrorKind::BrokenPipe
                {
                    eprintln!("Error writing to stdout: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    if let Err(e) = write!(io::stdout(), "{error_output}")
                        && e.kind() != io::ErrorKind::BrokenPipe
                    {
                        eprintln!("Error writing to stdout: {e}");
                    }
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
