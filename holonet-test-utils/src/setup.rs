use std::time::Duration;

use holonet::client::ApiClient;
use mockito::{Server, ServerGuard};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Owns a mock HTTP server and an API client pointed at it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub client: ApiClient,
}

impl TestSetup {
    /// Mock server plus a client that fetches sequentially.
    pub async fn new() -> Result<Self, TestError> {
        Self::with_concurrency(1).await
    }

    /// Mock server plus a client with the given fan-out bound.
    pub async fn with_concurrency(concurrency: usize) -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let client = ApiClient::builder()
            .endpoint(&server.url())
            .user_agent(TEST_USER_AGENT)
            .timeout(Duration::from_secs(2))
            .concurrency(concurrency)
            .build()?;

        Ok(TestSetup { server, client })
    }
}
