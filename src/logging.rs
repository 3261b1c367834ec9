//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only rendered
//! executions.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `runlog=debug`)
pub const LOG_ENV: &str = "RUNLOG_LOG";

/// Build the filter: `RUNLOG_LOG` if set, otherwise `debug` when verbose
/// and `warn` when not.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global stderr subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
