//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use memex_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable read for the log filter.
pub const LOG_ENV: &str = "MEMEX_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `MEMEX_LOG` environment variable for filtering and falls
/// back to `info`. Only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, true);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

/// Initialize from the `[observability]` config section. `MEMEX_LOG` still
/// wins over `log_level` when set.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
