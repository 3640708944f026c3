//! Error types for the holonet fetch core.
//!
//! A single flat taxonomy covers every way a fetch can fail, from request
//! construction through transport to decoding. Composite operations surface
//! the first error encountered verbatim; nothing in this crate retries or
//! swallows a failure.

use thiserror::Error;

/// Main error type for the holonet fetch core.
///
/// Every client and orchestrator operation returns this type. Each variant
/// maps to one failure class a caller may want to react to differently;
/// `Timeout` and `Network` in particular must stay distinguishable so a
/// consumer can tell a dead connection from a slow one.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be built locally and was never sent.
    #[error("Failed to construct request: {0}")]
    Construction(String),
    /// The transport could not reach the host.
    #[error("Network failure: {0}")]
    Network(String),
    /// The request exceeded its deadline.
    #[error("Request timed out")]
    Timeout,
    /// The response carried an HTTP status outside the success range.
    #[error("Unexpected HTTP status code: {0}")]
    Status(u16),
    /// The response body was not valid JSON or did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(String),
    /// Catch-all for transport errors with no more specific classification.
    #[error("Unclassified transport error: {0}")]
    Unknown(String),
}

impl Error {
    /// Stable machine-readable code for this error class.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Construction(_) => "construction",
            Self::Network(_) => "network",
            Self::Timeout => "timeout",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Process exit code for the CLI, one per error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Construction(_) => 2,
            Self::Network(_) => 3,
            Self::Timeout => 4,
            Self::Status(_) => 5,
            Self::Decode(_) => 6,
            Self::Unknown(_) => 7,
        }
    }

    /// Classifies a reqwest transport error into the taxonomy.
    ///
    /// Deadline expiry maps to `Timeout`, connection establishment failures
    /// to `Network`, and anything else to `Unknown`. Status and decode
    /// failures never reach this point; the client checks those explicitly.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Network(err.to_string())
        } else {
            Self::Unknown(err.to_string())
        }
    }
}
