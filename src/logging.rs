//! Tracing setup for the CLI.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize logging with a default level, overridable through `RUST_LOG`.
///
/// Events go to stderr so plan output on stdout stays clean.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
