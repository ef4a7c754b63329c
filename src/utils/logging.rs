//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber: `warn` by default, `debug` when verbose
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
