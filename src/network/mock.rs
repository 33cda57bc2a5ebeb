use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::network::*;

/// Scripted stand-in for the leaderboard backend.
///
/// Responses are queued up front and popped per call; an empty queue
/// answers with an empty record set resp. a refused upload, so tests
/// only need to script what they assert on.
pub struct MockBackend {
    laptimes: Mutex<VecDeque<Result<Vec<LapRecord>, ApiError>>>,
    uploads: Mutex<VecDeque<Result<UploadReceipt, ApiError>>>,
    nb_fetches: AtomicUsize,
    nb_uploads: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> MockBackend {
        MockBackend {
            laptimes: Mutex::new(VecDeque::new()),
            uploads: Mutex::new(VecDeque::new()),
            nb_fetches: AtomicUsize::new(0),
            nb_uploads: AtomicUsize::new(0),
        }
    }

    pub fn push_laptimes(&self, response: Result<Vec<LapRecord>, ApiError>) {
        self.laptimes.lock().unwrap().push_back(response);
    }

    pub fn push_upload(&self, response: Result<UploadReceipt, ApiError>) {
        self.uploads.lock().unwrap().push_back(response);
    }

    /// The number of record fetches issued so far.
    pub fn nb_fetches(&self) -> usize {
        self.nb_fetches.load(Ordering::SeqCst)
    }

    /// The number of screenshot uploads issued so far.
    pub fn nb_uploads(&self) -> usize {
        self.nb_uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn laptimes(&self) -> Result<Vec<LapRecord>, ApiError> {
        self.nb_fetches.fetch_add(1, Ordering::SeqCst);
        self.laptimes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![]))
    }

    async fn upload_screenshot(&self, _upload: ScreenshotUpload) -> Result<UploadReceipt, ApiError> {
        self.nb_uploads.fetch_add(1, Ordering::SeqCst);
        self.uploads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::Rejected {
                    reason: "no upload response scripted".to_string(),
                })
            })
    }
}

/// A record with the given partition and time; the remaining fields
/// only need to be distinct enough to tell records apart.
pub fn record(username: &str, map_name: &str, lap_time: &str) -> LapRecord {
    use chrono::TimeZone;

    LapRecord {
        username: username.to_string(),
        map_name: map_name.to_string(),
        lap_time: lap_time.to_string(),
        screenshot_url: format!("https://screenshots.test/{}/{}.png", map_name, username),
        uploaded_at: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}
