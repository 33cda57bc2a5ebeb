use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;

use crate::event::UploadOutcome;
use crate::network::{ApiError, Backend, ScreenshotUpload};

/// Where an upload attempt currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    /// No screenshot staged yet.
    Idle,

    /// A screenshot is staged, waiting for submission.
    Ready,

    /// The screenshot is on its way to the backend, which is
    /// analyzing it.
    InFlight,

    /// The backend stored a record for the screenshot.
    Succeeded,

    /// Nothing was stored; the user has to resubmit.
    Failed,
}

impl UploadStatus {
    pub fn label(&self) -> &'static str {
        use UploadStatus::*;
        match self {
            Idle => "idle",
            Ready => "ready",
            InFlight => "uploading",
            Succeeded => "succeeded",
            Failed => "failed",
        }
    }
}

/// A staged screenshot.
#[derive(Clone, Debug)]
pub struct ScreenshotFile {
    pub path: PathBuf,
    pub mime_type: &'static str,
}

/// State of one upload attempt. Choosing the next file resets it.
pub struct UploadState {
    file: Option<ScreenshotFile>,
    status: UploadStatus,
    message: Option<String>,
}

impl UploadState {
    fn init() -> Self {
        UploadState {
            file: None,
            status: UploadStatus::Idle,
            message: None,
        }
    }

    /// The staged screenshot, if any.
    pub fn file(&self) -> Option<&ScreenshotFile> {
        self.file.as_ref()
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    /// The user-facing message for the current attempt.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Shared component that allows to look up the upload attempt's state.
#[async_trait]
pub trait LiveUpload: Send + Sync {
    /// While holding this guard, the state is read-only, and can be referenced.
    async fn lock(&self) -> RwLockReadGuard<'_, UploadState>;

    async fn status(&self) -> UploadStatus {
        self.lock().await.status()
    }

    async fn message(&self) -> Option<String> {
        self.lock().await.message().map(String::from)
    }
}

#[derive(Clone)]
pub struct UploadController {
    api: Arc<dyn Backend>,
    state: Arc<RwLock<UploadState>>,
}

/// The MIME type the backend expects for this screenshot, or `None`
/// if the extension is not an allowed image format.
fn mime_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

impl UploadController {
    pub fn init(api: &Arc<dyn Backend>) -> Self {
        UploadController {
            api: api.clone(),
            state: Arc::new(RwLock::new(UploadState::init())),
        }
    }

    /// Stage a screenshot for the next submission, replacing any
    /// previously staged one and resetting the previous attempt.
    ///
    /// Only PNG and JPEG files are accepted; anything else leaves the
    /// staged file untouched and sets a message instead.
    pub async fn choose_file(&self, path: &Path) {
        let mime_type = match mime_for(path) {
            Some(mime_type) => mime_type,
            None => {
                log::debug!("refuse to stage '{}'", path.display());
                let mut state = self.state.write().await;
                state.message = Some("Only PNG or JPEG screenshots can be uploaded.".to_string());
                return;
            }
        };

        let mut state = self.state.write().await;
        state.file = Some(ScreenshotFile {
            path: path.to_path_buf(),
            mime_type,
        });
        state.status = UploadStatus::Ready;
        state.message = None;
    }

    /// Submit the staged screenshot to the backend.
    ///
    /// With no file staged, this is rejected before any network call,
    /// and returns `None`. Otherwise the attempt runs to completion and
    /// the settled outcome is returned for the facade to act on; this
    /// controller never triggers a records refresh itself.
    pub async fn submit(&self) -> Option<UploadOutcome> {
        let file = {
            let mut state = self.state.write().await;
            match state.file.clone() {
                Some(file) => {
                    state.status = UploadStatus::InFlight;
                    state.message = Some("Uploading and analyzing...".to_string());
                    file
                }
                None => {
                    state.message = Some("Choose a screenshot before uploading.".to_string());
                    return None;
                }
            }
        };

        let data = match tokio::fs::read(&file.path).await {
            Ok(data) => data,
            Err(io_err) => {
                log::error!("cannot read screenshot '{}': {}", file.path.display(), io_err);
                let reason = format!("Could not read '{}'.", file.path.display());
                return Some(self.settle_failed(reason).await);
            }
        };

        let file_name = file
            .path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "screenshot".to_string());

        let upload = ScreenshotUpload {
            file_name,
            mime_type: file.mime_type.to_string(),
            data,
        };

        match self.api.upload_screenshot(upload).await {
            Ok(receipt) => {
                let mut state = self.state.write().await;
                state.status = UploadStatus::Succeeded;
                state.message = Some(format!(
                    "Done! Recorded a {} lap for {}.",
                    receipt.map_name, receipt.username
                ));
                Some(UploadOutcome::Stored {
                    username: receipt.username,
                    map_name: receipt.map_name,
                })
            }
            Err(ApiError::Rejected { reason }) => Some(self.settle_failed(reason).await),
            Err(err) => {
                log::error!("screenshot upload failed: {}", err);
                Some(
                    self.settle_failed("Upload failed, please try again.".to_string())
                        .await,
                )
            }
        }
    }

    async fn settle_failed(&self, reason: String) -> UploadOutcome {
        let mut state = self.state.write().await;
        state.status = UploadStatus::Failed;
        state.message = Some(reason.clone());
        UploadOutcome::Rejected { reason }
    }
}

#[async_trait]
impl LiveUpload for UploadController {
    async fn lock(&self) -> RwLockReadGuard<'_, UploadState> {
        self.state.read().await
    }
}
