//! Logging setup
//!
//! Logs go to stderr so report text printed on stdout stays clean.
//!
//! Environment variables:
//! - `EXPENSE_TRACKER_LOG`: level/filter override (`info`, `debug`, etc.).
//! - `RUST_LOG`: fallback filter.
//!
//! Defaults to `warn`.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "EXPENSE_TRACKER_LOG";

static INIT: Once = Once::new();

fn resolve_env_filter() -> EnvFilter {
    if let Some(filter) = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
    {
        return filter;
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber once per process
pub fn init() {
    INIT.call_once(|| {
        let console_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr);
        let _ = tracing_subscriber::registry()
            .with(resolve_env_filter())
            .with(console_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!("logging initialized twice without panicking");
    }
}
