//! File logging with tracing
//!
//! The TUI owns stdout and headless mode prints NDJSON there, so every log
//! line goes to a daily-rolling file instead.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "SCRIVI_LOG";

/// Filter used when `SCRIVI_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "scrivi=info,warn";

/// Prefix of the rolling log files; the appender adds a date suffix
const LOG_FILE_PREFIX: &str = "scrivi.log";

/// Install the global subscriber.
///
/// ```bash
/// SCRIVI_LOG=debug scrivi
/// SCRIVI_LOG=scrivi_client=trace scrivi --headless -f draft.txt
/// ```
pub fn init() -> Result<()> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Logging to {}", dir.display());
    Ok(())
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `<data_local_dir>/scrivi/logs`, or `./scrivi/logs` when the platform has
/// no data directory
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scrivi")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_ends_with_scrivi_logs() {
        assert!(log_directory().ends_with("scrivi/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
