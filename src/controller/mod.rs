pub use facade::Controller;
pub use record::{LiveRecords, RecordController, RecordsState};
pub use screen::{LiveScreen, Screen, ScreenController, ScreenState};
pub use upload::{LiveUpload, ScreenshotFile, UploadController, UploadState, UploadStatus};

pub mod catalog;
pub mod leaderboard;

mod facade;
mod record;
mod screen;
mod upload;
