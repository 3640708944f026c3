//! Typed HTTP client for the upstream REST API.
//!
//! One place builds requests, executes them, validates HTTP status, decodes
//! JSON bodies into typed records, and classifies every failure into the
//! crate error taxonomy. The client carries no per-call mutable state; the
//! underlying connection pool is shared and read-only from this module's
//! perspective. There is no caching and no retry.

use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT};
use crate::error::Error;

/// Typed client for the upstream REST API.
///
/// Construct once via [`ApiClient::builder`] and pass by reference into the
/// services that need it. All operations are async, cancel-safe, and subject
/// to the per-request deadline configured at build time.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: Url,
    concurrency: usize,
}

/// Builder for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    endpoint: Option<String>,
    user_agent: Option<String>,
    timeout: Duration,
    concurrency: usize,
}

impl ApiClientBuilder {
    /// Absolute base URL of the upstream API. Required.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// Overrides the default `name/version (os)` user agent.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Deadline applied to each individual request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bound on concurrent member fetches in [`ApiClient::fetch_all`].
    ///
    /// Values below 1 are clamped to 1. Output ordering is unaffected by
    /// this bound.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Validates the endpoint and builds the configured client.
    pub fn build(self) -> Result<ApiClient, Error> {
        let raw = self
            .endpoint
            .ok_or_else(|| Error::Construction("No endpoint configured".to_string()))?;

        let endpoint = Url::parse(&raw)
            .map_err(|e| Error::Construction(format!("Invalid endpoint {raw:?}: {e}")))?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Construction(format!(
                "Endpoint {raw:?} is not an absolute base URL"
            )));
        }

        let user_agent = self.user_agent.unwrap_or_else(|| {
            format!(
                "{}/{} ({})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            )
        });

        // Accept-Encoding is negotiated by the transport's gzip support;
        // setting it by hand would turn off automatic decompression.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en"));

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Construction(format!("Failed to build HTTP client: {e}")))?;

        Ok(ApiClient {
            http,
            endpoint,
            concurrency: self.concurrency,
        })
    }
}

impl ApiClient {
    /// Creates a builder with the default timeout and fan-out bound.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder {
            endpoint: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Base URL this client was configured with.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds a list URL by joining `path` onto the endpoint path and
    /// appending `query` with standard URL encoding.
    pub fn list_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = self.endpoint.clone();

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::Construction(format!("Endpoint {} cannot be a base URL", self.endpoint))
            })?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Fetches `url` with GET and decodes the body into `T`.
    ///
    /// Transport failures classify to `Timeout`, `Network`, or `Unknown`. A
    /// response with a status outside [200, 300) fails with `Status` and the
    /// body is never decoded. A body that is not valid JSON matching `T`
    /// fails with `Decode`.
    pub async fn fetch_one<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        tracing::debug!(%url, "fetching");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(Error::from_transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Fetches every URL in `urls`, preserving input order in the output.
    ///
    /// Requests are issued with the configured fan-out bound; ordering is
    /// preserved regardless of per-request completion timing. The first
    /// error aborts the whole call and remaining requests are not issued.
    /// An empty input returns an empty output without touching the network.
    pub async fn fetch_all<T: DeserializeOwned>(&self, urls: &[Url]) -> Result<Vec<T>, Error> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        stream::iter(urls.iter().cloned())
            .map(|url| self.fetch_one::<T>(url))
            .buffered(self.concurrency)
            .try_collect()
            .await
    }
}
