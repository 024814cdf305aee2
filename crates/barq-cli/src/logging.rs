//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Picks the log filter: `RUST_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn filter(verbose: bool, configured_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(configured_level)
        }
    })
}

/// Installs the global subscriber, writing to stderr so command output
/// stays pipeable. Calling it twice is harmless.
pub fn init(verbose: bool, configured_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, configured_level))
        .with_writer(std::io::stderr)
        .try_init();
}
