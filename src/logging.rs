//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing-subscriber` so stdout only
//! carries command output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "BLOCKFIX_LOG";

/// Initializes the global subscriber.
///
/// The filter comes from `BLOCKFIX_LOG`, then `RUST_LOG`, then defaults to
/// `warn` (`debug` when `verbose` is set). Calling this more than once is
/// harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
