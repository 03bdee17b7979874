//! Error types for armio-sdk.
//!
//! Every fallible call into the native layer reports exactly one of two
//! kinds: a malformed argument on our side of the boundary, or an
//! operational failure on the native side. The SDK performs no local
//! recovery and never retries; callers own any backoff policy.

use thiserror::Error;

/// Result type for armio-sdk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced across the native boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A malformed input: bad application identifier, null device handle,
    /// or an out-of-range value handed to a boundary call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operational failure in the native layer, e.g. the background
    /// service is not running and a connection could not be established.
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}
