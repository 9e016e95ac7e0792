//! Logging setup for the binaries.
//!
//! Diagnostics go to stderr through `tracing-subscriber`; stdout is reserved
//! for the report and the weather text.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a given number of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `verbosity` when set. Calling this twice is harmless:
/// the second call leaves the first subscriber in place.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
