//! Diagnostic logging setup.
//!
//! The library only emits `tracing` events; the binary installs a
//! `fmt` subscriber writing to stderr so that stdout carries results only.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Errors while installing the log subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(#[source] TryInitError),
}

/// Pick the filter directive: each `-v` raises verbosity past the configured level.
pub fn resolve_filter(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Build an [`EnvFilter`] from a directive such as `"warn"` or `"arith=debug"`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        source,
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(directive: &str, ansi: bool) -> Result<(), LoggingError> {
    let filter = build_filter(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .finish()
        .try_init()
        .map_err(LoggingError::Install)
}
