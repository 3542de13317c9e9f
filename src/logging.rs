//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for `--json` output and JSON-RPC
//! frames. The filter comes from `AUTOMIX_LOG`, then `RUST_LOG`, then
//! defaults to `info` (or `debug` with `verbose`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "AUTOMIX_LOG";

/// Builds the filter from the environment.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    std::env::var(LOG_ENV)
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
}
