use crate::constants::DEFAULT_LOG_LEVEL;
use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber
///
/// The filter comes from `LOGLEVEL` (e.g. `debug` or `sql_dam=debug,sqlx=info`),
/// falling back to `info`. Safe to call more than once; only the first call
/// installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let filter = std::env::var("LOGLEVEL")
            .ok()
            .and_then(|level| EnvFilter::try_new(level).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .compact(),
            )
            .try_init();
    });
}
