//! Logging init: stderr only, env-filter controlled.
//!
//! Progress lines for the operator go to stdout; tracing diagnostics stay on
//! stderr so the two streams can be separated in scripts.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. `RUST_LOG` overrides the default
/// filter (`info,napfetch=debug`).
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,napfetch=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
