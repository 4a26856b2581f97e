//! Shared fixtures for the lock tests and the `trace_fixture` binary.

pub mod reference;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Install a test-writer `tracing` subscriber once per test binary.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
