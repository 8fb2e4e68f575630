use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    error::{ApiError, SelectionError},
    types::{ContentId, UploadResponse},
};

pub const MP4_MIME: &str = "video/mp4";

/// Shown when a dropped or typed file is not an MP4 video.
pub const WRONG_TYPE_ALERT: &str = "Please select an MP4 file";
pub const BUSY_ALERT: &str = "Please wait for the current upload to finish";

/// A local file accepted for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    path: PathBuf,
    name: String,
}

impl VideoFile {
    /// Accept `path` only if its MIME type is exactly `video/mp4`.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, SelectionError> {
        let path = path.into();
        let mime = mime_type(&path);
        if mime != MP4_MIME {
            return Err(SelectionError::NotMp4 { path, mime });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video.mp4".to_string());
        Ok(Self { path, name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    FileSelected(VideoFile),
    Uploading(VideoFile),
    /// The service accepted the file but returned no content id.
    Succeeded { file: VideoFile, message: String },
    Failed(VideoFile),
}

/// Upload form model: selected file, drop-zone hover and the single in-flight upload.
#[derive(Debug)]
pub struct Uploader {
    state: UploadState,
    drag_over: bool,
    alert: Option<String>,
}

impl Default for Uploader {
    fn default() -> Self {
        Self::new()
    }
}

impl Uploader {
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
            drag_over: false,
            alert: None,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn selected(&self) -> Option<&VideoFile> {
        match &self.state {
            UploadState::Idle => None,
            UploadState::FileSelected(file)
            | UploadState::Uploading(file)
            | UploadState::Succeeded { file, .. }
            | UploadState::Failed(file) => Some(file),
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading(_))
    }

    pub fn can_upload(&self) -> bool {
        self.selected().is_some() && !self.is_uploading()
    }

    pub fn drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn set_drag_over(&mut self, hovering: bool) {
        self.drag_over = hovering;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Select a file from a drop or a typed path. Rejected selections leave the state untouched.
    pub fn select(&mut self, path: impl Into<PathBuf>) -> Result<(), SelectionError> {
        self.drag_over = false;

        if self.is_uploading() {
            debug!("Ignoring selection while uploading");
            self.alert = Some(BUSY_ALERT.to_string());
            return Err(SelectionError::Busy);
        }

        match VideoFile::from_path(path) {
            Ok(file) => {
                debug!(file = %file.name(), "Video selected");
                self.alert = None;
                self.state = UploadState::FileSelected(file);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Rejected file selection");
                self.alert = Some(WRONG_TYPE_ALERT.to_string());
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        if !self.is_uploading() {
            self.state = UploadState::Idle;
        }
    }

    /// Move to `Uploading` and hand back the file to send. `None` if there is
    /// nothing selected or an upload is already running.
    pub fn begin(&mut self) -> Option<VideoFile> {
        if !self.can_upload() {
            return None;
        }

        let file = self.selected()?.clone();
        info!(file = %file.name(), "Starting upload");
        self.state = UploadState::Uploading(file.clone());
        Some(file)
    }

    /// Settle the running upload. Returns the content id to navigate to, if any.
    pub fn finish(&mut self, result: Result<UploadResponse, &ApiError>) -> Option<ContentId> {
        let UploadState::Uploading(file) = &self.state else {
            debug!("Ignoring upload result with no upload in flight");
            return None;
        };
        let file = file.clone();

        match result {
            Ok(UploadResponse {
                success: true,
                video_id: Some(id),
                ..
            }) => {
                info!(content_id = %id, "Upload complete");
                self.state = UploadState::Idle;
                Some(id)
            }
            Ok(UploadResponse {
                success: true,
                message,
                video_id: None,
            }) => {
                info!(%message, "Upload accepted without a content id");
                self.state = UploadState::Succeeded { file, message };
                None
            }
            Ok(UploadResponse { message, .. }) => {
                warn!(%message, "Upload rejected by service");
                self.state = UploadState::Failed(file);
                None
            }
            Err(e) => {
                warn!(error = %e, "Upload failed");
                self.state = UploadState::Failed(file);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(id: Option<&str>) -> UploadResponse {
        UploadResponse {
            success: true,
            message: "Video processed".to_string(),
            video_id: id.map(ContentId::new),
        }
    }

    #[test]
    fn accepts_only_mp4() {
        assert!(VideoFile::from_path("/videos/lecture-01.mp4").is_ok());

        for path in ["notes.pdf", "lecture.mov", "lecture.webm", "lecture", "song.mp3"] {
            let err = VideoFile::from_path(path).unwrap_err();
            assert!(matches!(err, SelectionError::NotMp4 { .. }), "{path}");
        }
    }

    #[test]
    fn rejected_selection_alerts_and_keeps_state() {
        let mut uploader = Uploader::new();
        assert!(uploader.select("slides.pptx").is_err());
        assert_eq!(uploader.state(), &UploadState::Idle);
        assert_eq!(uploader.alert(), Some(WRONG_TYPE_ALERT));
        assert!(uploader.begin().is_none());

        uploader.select("intro.mp4").unwrap();
        assert!(uploader.select("intro.avi").is_err());
        assert_eq!(uploader.selected().map(VideoFile::name), Some("intro.mp4"));
    }

    #[test]
    fn success_with_id_navigates_once_and_resets() {
        let mut uploader = Uploader::new();
        uploader.select("/tmp/lecture.mp4").unwrap();
        let file = uploader.begin().unwrap();
        assert_eq!(file.name(), "lecture.mp4");
        assert!(uploader.is_uploading());

        let id = uploader.finish(Ok(accepted(Some("abc123"))));
        assert_eq!(id, Some(ContentId::new("abc123")));
        assert_eq!(uploader.state(), &UploadState::Idle);

        assert_eq!(uploader.finish(Ok(accepted(Some("abc123")))), None);
    }

    #[test]
    fn success_without_id_does_not_navigate() {
        let mut uploader = Uploader::new();
        uploader.select("lecture.mp4").unwrap();
        uploader.begin().unwrap();

        assert_eq!(uploader.finish(Ok(accepted(None))), None);
        assert!(matches!(uploader.state(), UploadState::Succeeded { .. }));
    }

    #[test]
    fn uploads_are_mutually_exclusive() {
        let mut uploader = Uploader::new();
        uploader.select("lecture.mp4").unwrap();
        assert!(uploader.begin().is_some());
        assert!(uploader.begin().is_none());
        assert_eq!(uploader.select("other.mp4"), Err(SelectionError::Busy));

        uploader.clear();
        assert!(uploader.is_uploading());
    }

    #[test]
    fn selection_during_upload_alerts() {
        let mut uploader = Uploader::new();
        uploader.select("lecture.mp4").unwrap();
        uploader.begin().unwrap();

        assert_eq!(uploader.select("other.mp4"), Err(SelectionError::Busy));
        assert_eq!(uploader.alert(), Some(BUSY_ALERT));
        assert_eq!(uploader.selected().map(VideoFile::name), Some("lecture.mp4"));
    }

    #[test]
    fn failure_allows_retry() {
        let mut uploader = Uploader::new();
        uploader.select("lecture.mp4").unwrap();
        uploader.begin().unwrap();

        let err = ApiError::Status {
            endpoint: "/upload".to_string(),
            status: 500,
        };
        assert_eq!(uploader.finish(Err(&err)), None);
        assert!(matches!(uploader.state(), UploadState::Failed(_)));

        let retry = uploader.begin().unwrap();
        assert_eq!(retry.name(), "lecture.mp4");
    }

    #[test]
    fn unsuccessful_response_is_a_failure() {
        let mut uploader = Uploader::new();
        uploader.select("lecture.mp4").unwrap();
        uploader.begin().unwrap();

        let rejected = UploadResponse {
            success: false,
            message: "Unsupported codec".to_string(),
            video_id: None,
        };
        assert_eq!(uploader.finish(Ok(rejected)), None);
        assert!(matches!(uploader.state(), UploadState::Failed(_)));
    }

    #[test]
    fn selecting_clears_drag_over() {
        let mut uploader = Uploader::new();
        uploader.set_drag_over(true);
        uploader.select("lecture.mp4").unwrap();
        assert!(!uploader.drag_over());
    }
}
