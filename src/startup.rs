//! Construction of the crate's long-lived resources from configuration.

use tracing_subscriber::EnvFilter;

use crate::{client::ApiClient, config::Config, error::Error};

/// Build and configure the API client from the provided configuration
pub fn build_api_client(config: &Config) -> Result<ApiClient, Error> {
    let client = ApiClient::builder()
        .endpoint(&config.endpoint)
        .timeout(config.timeout)
        .concurrency(config.concurrency)
        .build()?;

    Ok(client)
}

/// Install the global tracing subscriber for the binary.
///
/// Filtering follows `RUST_LOG`, defaulting to `info` when unset.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}
