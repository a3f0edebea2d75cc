//! Tracing setup: JSON subscriber, operation spans, and event helpers.

pub mod events;
pub mod spans;

use hotspot_core::config::defaults::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV: &str = "HOTSPOT_LOG";

/// Install the JSON subscriber, filtered by `HOTSPOT_LOG` or `info` when
/// unset. Every line carries the innermost operation span, plus thread and
/// source location.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    install(filter, true)
}

/// Install the JSON subscriber with explicit directives, without source
/// locations. Meant for tests and embedding hosts.
pub fn init_tracing_with_filter(directives: &str) -> bool {
    install(EnvFilter::new(directives), false)
}

fn install(filter: EnvFilter, locations: bool) -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_thread_ids(locations)
        .with_file(locations)
        .with_line_number(locations)
        .try_init()
        .is_ok()
}
