//! Tracing/logging initialization.
//!
//! One JSON line per event on stdout. `RUST_LOG` directives layer on top of
//! the `info` default. Degraded inventory lookups surface only as warnings
//! here, so production should never filter below `warn`.

use tracing_subscriber::EnvFilter;

/// Install the process-wide tracing subscriber.
///
/// Safe to call repeatedly; only the first call installs anything.
pub fn init() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
