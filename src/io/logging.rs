//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
///
/// `quiet` wins over `verbose`.
pub const fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install a stderr subscriber; `RUST_LOG` overrides the flag-derived level
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    // A subscriber installed earlier (e.g. by a test harness) is kept
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
