use serde::Serialize;

use crate::controller::UploadState;
use crate::widget::Widget;

/// The screenshot upload form, visible on every screen.
#[derive(Serialize, Debug)]
pub struct UploadFormWidget<'a> {
    /// Status label of the current attempt.
    pub status: &'static str,

    /// Name of the staged screenshot, if any.
    pub file_name: Option<String>,

    /// The user-facing message of the current attempt: progress,
    /// success, or why it failed.
    pub message: Option<&'a str>,
}

impl<'a> UploadFormWidget<'a> {
    pub fn new(upload: &'a UploadState) -> Self {
        UploadFormWidget {
            status: upload.status().label(),
            file_name: upload.file().and_then(|file| {
                file.path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
            }),
            message: upload.message(),
        }
    }
}

impl Widget for UploadFormWidget<'_> {
    const FILE: &'static str = "upload_form.j2";
}
