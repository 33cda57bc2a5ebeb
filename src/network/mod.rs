use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use laptimes::*;
pub use upload::*;

use crate::config::{Config, USER_AGENT};

mod laptimes;
#[cfg(test)]
pub mod mock;
mod upload;

/// Possible errors when talking to the leaderboard backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Could not reach the backend, or the request timed out.
    #[error("API request failed")]
    Request(#[from] reqwest::Error),

    /// The records endpoint answered, but not with a success status.
    #[error("records endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// Likely a bug on our end, or a backend contract change.
    #[error("failed to parse API response")]
    Parse(#[from] serde_json::Error),

    /// The backend refused an uploaded screenshot, f.e. because
    /// it could not detect a lap time in it.
    #[error("upload rejected: {reason}")]
    Rejected { reason: String },
}

/// The operations the leaderboard backend offers to this client.
///
/// Screenshot analysis, storage and ranking persistence all live behind
/// this seam; the client only ever reads the full record set, and hands
/// over screenshots.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch all lap records.
    async fn laptimes(&self) -> Result<Vec<LapRecord>, ApiError>;

    /// Submit a screenshot for analysis and storage, and return
    /// the receipt for the stored record.
    async fn upload_screenshot(&self, upload: ScreenshotUpload) -> Result<UploadReceipt, ApiError>;
}

/// HTTP client for the leaderboard backend.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Build the client once at startup; the base URL and the request
    /// timeout are fixed for the rest of the session.
    pub fn new(config: &Config) -> ApiClient {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build http client");

        ApiClient {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn laptimes(&self) -> Result<Vec<LapRecord>, ApiError> {
        self.fetch_laptimes().await
    }

    async fn upload_screenshot(&self, upload: ScreenshotUpload) -> Result<UploadReceipt, ApiError> {
        self.post_screenshot(upload).await
    }
}
