//! Tracing/logging setup shared by every hatworks binary.

/// Wire up process-wide observability. Call once, first thing in `main`.
pub fn init() {
    tracing::init();
}

/// Subscriber construction and filtering.
pub mod tracing;
