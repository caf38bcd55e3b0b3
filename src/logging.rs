//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so the listing on stdout is never interleaved
//! with log lines.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directive (e.g. `lsrs=debug`).
pub const LOG_ENV_VAR: &str = "LSRS_LOG";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
