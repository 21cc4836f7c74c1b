//! Diagnostic logging to stderr.

use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `debug` or
/// `tenchord_core=debug`.
pub const LOG_ENV: &str = "TENCHORD_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. Quiz output goes to stdout, so logs are
/// written to stderr.
pub fn init() -> Result<(), String> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {e}"))
}
