//! Process configuration for the holonet binary.
//!
//! Configuration is read once at startup and passed by value into client
//! construction. There is no process-wide configuration global; anything
//! that needs these values receives them explicitly.

use std::time::Duration;

use crate::error::Error;

/// Default upstream endpoint for the public SWAPI deployment.
pub const DEFAULT_ENDPOINT: &str = "https://swapi.dev/api";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound on concurrent member fetches during fan-out.
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Startup configuration for the fetch core.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute base URL of the upstream API.
    pub endpoint: String,
    /// Deadline applied to each individual request.
    pub timeout: Duration,
    /// Bound on concurrent member fetches during fan-out.
    pub concurrency: usize,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `HOLONET_ENDPOINT`, `HOLONET_TIMEOUT_SECS`,
    /// `HOLONET_CONCURRENCY`. A present-but-unparsable value is a
    /// construction error rather than a silent fallback.
    pub fn from_env() -> Result<Self, Error> {
        let endpoint =
            std::env::var("HOLONET_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let timeout = match std::env::var("HOLONET_TIMEOUT_SECS") {
            Ok(value) => {
                let secs: u64 = value.parse().map_err(|_| {
                    Error::Construction(format!(
                        "Invalid value for HOLONET_TIMEOUT_SECS: {value:?}"
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        let concurrency = match std::env::var("HOLONET_CONCURRENCY") {
            Ok(value) => value.parse().map_err(|_| {
                Error::Construction(format!("Invalid value for HOLONET_CONCURRENCY: {value:?}"))
            })?,
            Err(_) => DEFAULT_CONCURRENCY,
        };

        Ok(Self {
            endpoint,
            timeout,
            concurrency,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}
