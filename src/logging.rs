//! Tracing/logging initialization.
//!
//! Logs always go to stderr so they never mix with menu or command output on
//! stdout.

use std::io;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Build the log filter
///
/// An explicit directive wins over `RUST_LOG`; an invalid explicit directive
/// falls back to the default.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(directive) => EnvFilter::try_new(directive)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(level: Option<&str>, json: bool) {
    let filter = build_filter(level);

    if json {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(false)
            .with_writer(io::stderr)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .with_target(false)
            .with_writer(io::stderr)
            .try_init();
    }
}
