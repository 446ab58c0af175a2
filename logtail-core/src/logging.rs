use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}

pub fn default_log_mode() -> LogMode {
    if io::stdout().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

/// Initialize the global subscriber with environment-based filtering.
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - `Json` flattens event fields for cleaner structured output
/// - `Pretty` is meant for interactive terminals
pub fn init_logging(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match mode {
        LogMode::Json => fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .init(),
        LogMode::Pretty => fmt().with_env_filter(filter).compact().init(),
    }
}
