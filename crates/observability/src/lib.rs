//! Tracing/logging setup for binaries embedding the forecasting engine.
//!
//! The engine crates only *emit* `tracing` events; subscribing is the
//! embedding process's job, and this is its one-call setup.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// JSON output with timestamps, filtered via `RUST_LOG` (default `info`).
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
