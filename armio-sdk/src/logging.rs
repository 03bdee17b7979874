//! Logging setup for armio-sdk.
//!
//! The SDK emits `tracing` events from its dispatch and registry internals
//! but never installs a subscriber on its own; host applications opt in
//! through this module (or bring their own subscriber). The default is
//! silence, so interactive hosts render cleanly.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// How much the SDK should say, and where.
#[derive(Debug, Clone, Copy)]
pub enum LoggingMode {
    /// No output.
    Silent,
    /// Compact stderr output for development.
    Development,
    /// Verbose output with source locations for debugging.
    Debug,
}

/// Logging configuration error.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install a global subscriber for the given mode.
///
/// Call early, before constructing a [`Hub`](crate::Hub). Fails if another
/// subscriber is already installed.
///
/// # Environment variables
///
/// - `ARMIO_LOG_LEVEL`: override the log level (error, warn, info, debug,
///   trace), with `RUST_LOG` as a fallback.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let subscriber = Registry::default()
                .with(fmt::layer().with_target(false).compact())
                .with(env_filter("info"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let subscriber = Registry::default()
                .with(fmt::layer().pretty().with_file(true).with_line_number(true))
                .with(env_filter("debug"));

            subscriber
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Install a subscriber according to `ARMIO_LOG_MODE` (`silent`,
/// `development` or `debug`). Defaults to silent when unset or unknown.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = match std::env::var("ARMIO_LOG_MODE").as_deref() {
        Ok("development") => LoggingMode::Development,
        Ok("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    };

    init_logging(mode)
}

/// Whether a global subscriber has been installed, by this module or any
/// other.
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

fn env_filter(default_level: &str) -> EnvFilter {
    if let Ok(level) = std::env::var("ARMIO_LOG_LEVEL") {
        EnvFilter::new(level)
    } else if let Ok(rust_log) = std::env::var("RUST_LOG") {
        EnvFilter::new(rust_log)
    } else {
        EnvFilter::new(default_level)
    }
}
