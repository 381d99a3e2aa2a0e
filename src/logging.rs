//! Structured logging via `tracing`. Library code only emits events; the
//! binaries install the subscriber.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Environment variable that overrides the configured level/filter.
pub const LOG_ENV: &str = "HELIXMAZE_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("failed to install logger: {0}")]
    Install(String),
}

/// Build the filter: `HELIXMAZE_LOG` wins, otherwise `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(level)?),
    }
}

/// Install a text subscriber writing to stderr, so stdout stays free for
/// machine-readable output.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let filter = build_filter(level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
