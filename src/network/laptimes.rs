use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::network::{ApiClient, ApiError};

/// One stored lap submission.
///
/// Records are immutable once received; a fresh set replaces the
/// previous one wholesale on every fetch.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LapRecord {
    /// The player this lap was extracted for.
    pub username: String,

    /// The map this lap was driven on; records that share a map name
    /// form one leaderboard.
    pub map_name: String,

    /// The formatted lap duration, f.e. "01:23.456".
    ///
    /// The backend stores times zero-padded per map, so that comparing
    /// them as strings orders them by duration.
    pub lap_time: String,

    /// Link to the uploaded screenshot this record was extracted from.
    pub screenshot_url: String,

    /// The moment the screenshot was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

impl ApiClient {
    /// Fetch all lap records from the backend.
    ///
    /// There is no pagination and no server-side filtering; the full set
    /// is re-fetched every time, and maps are filtered locally.
    pub(super) async fn fetch_laptimes(&self) -> Result<Vec<LapRecord>, ApiError> {
        let url = format!("{}/api/laptimes", self.base_url);

        log::debug!("fetch lap records from {}", &url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let json: String = response.text().await?;
        let records: Vec<LapRecord> = serde_json::from_str(&json)?;
        Ok(records)
    }
}
