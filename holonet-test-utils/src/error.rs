use thiserror::Error;

/// Errors surfaced while preparing or running a test.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Api(#[from] holonet::error::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Test setup failed: {0}")]
    Setup(String),
}
