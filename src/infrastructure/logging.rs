use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing with a compact formatter writing to stderr.
/// - Respects `RUST_LOG` if set
/// - Falls back to `warn` so the menu on stdout stays readable
/// - Safe to call more than once
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
