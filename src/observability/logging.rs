//! Structured logging.

use tracing_subscriber::EnvFilter;

use crate::config::schema::ObservabilityConfig;

/// Initialize the tracing subscriber from configuration.
///
/// `RUST_LOG` overrides the configured level when set. Calling this
/// twice panics (the global subscriber can only be installed once), so
/// it belongs in the host application's startup path.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
