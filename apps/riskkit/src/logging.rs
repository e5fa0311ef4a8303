//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for
//! command output such as scaffold progress.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when neither `--log` nor `RISKKIT_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter, falling back to [`DEFAULT_FILTER`] if `directives`
/// does not parse.
#[must_use]
pub fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("Warning: ignoring invalid log filter '{directives}': {err}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(directives: &str) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter_from(directives))
        .try_init()
        .ok();
}
