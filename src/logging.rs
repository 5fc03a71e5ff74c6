//! Log output for the `chatdesk` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is up
//! to the application. The CLI calls [`init_logging`] once at startup.
//! Logs always go to stderr so they never mix with records written to
//! stdout.

use std::env;
use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Environment variable that overrides the verbosity flags.
///
/// Takes an [`EnvFilter`] directive such as `chatdesk=trace`.
pub const LOG_ENV: &str = "CHATDESK_LOG";

/// Errors that can arise while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid logging filter in CHATDESK_LOG: {0}")]
    Filter(#[from] ParseError),
    #[error("failed to install logging subscriber: {0}")]
    Subscriber(String),
}

/// Maps `-v` / `-q` counts to a default filter directive.
pub fn level_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter from [`LOG_ENV`], falling back to the given directive.
pub fn build_filter(default_directive: &str) -> Result<EnvFilter, LoggingError> {
    match env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => Ok(EnvFilter::try_new(directives)?),
        _ => Ok(EnvFilter::try_new(default_directive)?),
    }
}

/// Installs the global stderr subscriber.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), LoggingError> {
    let filter = build_filter(level_directive(verbose, quiet))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))
}
