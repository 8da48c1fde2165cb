//! Tracing subscriber setup.
//!
//! Log output goes to stderr so that extracted tokens on stdout stay clean.
//! The filter is read from `SIFT_LOG` (standard `EnvFilter` directives) and
//! falls back to the level passed by the caller.

use tracing_subscriber::EnvFilter;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "SIFT_LOG";

/// Build the filter used by [`init_tracing`].
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
