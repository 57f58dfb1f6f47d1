//! Tracing/logging initialization.
//!
//! `RUST_LOG` wins over the configured default filter. Safe to call more than
//! once; later calls are no-ops.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Build the filter from `RUST_LOG`, falling back to `default_directive`
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize tracing for the process.
pub fn init(default_directive: &str, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
