// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes tracing output for the run.
/// Honors the `RUST_LOG` environment variable and falls back to "info"
/// so the per-document "Saved" lines are visible by default.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
