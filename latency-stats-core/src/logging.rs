use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Reports go to stdout, so only warnings are logged unless `RUST_LOG` says
/// otherwise.
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

/// Initialize the logging system on stderr with environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "warn" if not set)
/// - Human readable output on a terminal, flattened JSON events otherwise
pub fn init_logging() {
    init_logging_with(default_log_format());
}

pub fn init_logging_with(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Pretty => builder.with_target(false).init(),
        LogFormat::Json => builder.json().flatten_event(true).init(),
    }
}
