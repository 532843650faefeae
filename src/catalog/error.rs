use reqwest::StatusCode;
use thiserror::Error;

/// Anything that stops the catalog from yielding a parseable product list.
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("catalog responded with status {0}")]
    Status(StatusCode),
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog payload is not a product list: {0}")]
    Decode(#[from] serde_json::Error),
}
