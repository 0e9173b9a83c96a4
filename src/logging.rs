//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so stdout carries only the generated commands.
//! The level comes from `--verbose` alone; no environment variable is read.

use tracing::Level;

/// Level used for a given verbosity flag.
pub fn level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(verbose))
        .with_target(false)
        .without_time()
        .try_init();
}
