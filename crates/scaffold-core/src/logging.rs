//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Diagnostics go to stderr and stay silent unless `RUST_LOG` asks for them,
/// so they never mix with the progress lines on stdout.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
