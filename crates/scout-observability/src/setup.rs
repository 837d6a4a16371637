//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable read for the log filter.
pub const LOG_ENV: &str = "SCOUT_LOG";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Initialize the global subscriber.
///
/// Reads `SCOUT_LOG` for the filter (e.g. `scout_orchestrator=debug`),
/// falling back to `info`. Idempotent: only the first call installs a
/// subscriber.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    install(format, filter);
}

/// Initialize with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(format: LogFormat, filter: &str) {
    install(format, EnvFilter::new(filter));
}

fn install(format: LogFormat, filter: EnvFilter) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = match format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_current_span(true),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init(),
        };
        // Another subscriber may already be installed by the host.
        let _ = result;
    });
}
