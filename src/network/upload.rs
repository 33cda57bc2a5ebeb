use reqwest::multipart;
use serde::Deserialize;

use crate::network::{ApiClient, ApiError};

/// A screenshot read from disk, ready to be sent to the backend.
#[derive(Debug)]
pub struct ScreenshotUpload {
    /// File name sent along with the multipart field.
    pub file_name: String,

    /// Either "image/png" or "image/jpeg".
    pub mime_type: String,

    /// The image data.
    pub data: Vec<u8>,
}

/// The backend's answer to a successful upload: the record it extracted
/// from the screenshot and stored.
#[derive(Deserialize, Clone, Debug)]
pub struct UploadReceipt {
    /// The player the backend recognized in the screenshot.
    pub username: String,

    /// The map the backend recognized in the screenshot.
    pub map_name: String,

    /// The extracted lap time. Older backend revisions omit it
    /// in the receipt, so it stays optional.
    #[serde(default)]
    pub lap_time: Option<String>,
}

/// Error payload of a refused upload, f.e. when no lap time
/// could be detected in the image.
#[derive(Deserialize, Debug)]
struct UploadRejection {
    error: Option<String>,
}

impl ApiClient {
    /// Submit a screenshot to the backend, which analyzes it and stores
    /// the extracted record.
    ///
    /// Any non-success status is surfaced as `ApiError::Rejected`, with
    /// the backend's own error text when its payload carries one.
    pub(super) async fn post_screenshot(
        &self,
        upload: ScreenshotUpload,
    ) -> Result<UploadReceipt, ApiError> {
        let url = format!("{}/api/upload", self.base_url);

        log::debug!("upload screenshot '{}' to {}", &upload.file_name, &url);
        let part = multipart::Part::bytes(upload.data)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)?;
        let form = multipart::Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        let json: String = response.text().await?;

        if status.is_success() {
            let receipt: UploadReceipt = serde_json::from_str(&json)?;
            return Ok(receipt);
        }

        let reason = serde_json::from_str::<UploadRejection>(&json)
            .ok()
            .and_then(|rejection| rejection.error)
            .unwrap_or_else(|| format!("upload failed with status {}", status));
        Err(ApiError::Rejected { reason })
    }
}
