//! Log file setup.
//!
//! Installs a `tracing` subscriber writing plain-text lines to a file. The
//! environment is not consulted; the filter comes from configuration only.

use std::{fs::OpenOptions, io, sync::Mutex};

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::LogConfig;

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log file could not be opened.
    #[error("cannot open log file: {0}")]
    Io(#[from] io::Error),

    /// Filter directive did not parse.
    #[error("invalid log level: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Parse a filter directive such as `info` or `tcpline_client=trace,warn`.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(level)?)
}

/// Install the global subscriber if logging is configured.
///
/// Returns `true` if a subscriber was installed.
pub fn init(config: Option<&LogConfig>) -> Result<bool, LoggingError> {
    let Some(config) = config else {
        return Ok(false);
    };

    let filter = build_filter(&config.level)?;
    let file = OpenOptions::new().create(true).append(true).open(&config.path)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()?;

    tracing::info!(path = %config.path.display(), "logging started");
    Ok(true)
}
