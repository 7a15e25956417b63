//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

// Default filter: service at info, sqlx statement logging quieted.
const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Initialize tracing/logging for the process.
///
/// Honors `RUST_LOG` when set; safe to call multiple times (subsequent calls
/// are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
