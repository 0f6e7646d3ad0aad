//! Tracing setup for native embedders
//!
//! The bridge only emits `tracing` events; installing a subscriber is the
//! embedder's call. On wasm32 there is no stdout to write to, so this is a
//! no-op and `init()` reports through the browser console instead.

use super::config::LoggingConfig;

/// Install a global fmt subscriber filtered by `config.level`.
///
/// Returns `false` when a global subscriber was already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(config: &LoggingConfig) -> bool {
    use tracing_subscriber::EnvFilter;

    let (filter, rejected) = match EnvFilter::try_new(&config.level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();
    if let Some(err) = rejected {
        tracing::warn!(level = %config.level, error = %err, "invalid log filter, using 'info'");
    }
    installed
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging(_config: &LoggingConfig) -> bool {
    false
}
