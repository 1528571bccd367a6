// Source trait for raw sheet rows
use crate::domain::sheet::RawRow;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to sheet endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sheet endpoint returned status {0}")]
    Status(StatusCode),

    #[error("response body of {len} bytes does not fit the callback envelope")]
    Envelope { len: usize },

    #[error("failed to parse sheet payload: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the trailing window of rows, oldest first.
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, FetchError>;
}
