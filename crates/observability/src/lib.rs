//! Tracing/logging setup shared by the pantry binaries.

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init(debug: bool) {
    tracing::init(debug);
}

/// Tracing configuration (filters, output format).
pub mod tracing;
