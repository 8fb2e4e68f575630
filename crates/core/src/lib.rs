//! LectureLearn Core Library
//!
//! HTTP client for the lecture service plus the view models behind the
//! desktop app: video upload, transcript browsing and the read-only
//! multiple-choice answer key.

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod quiz;
pub mod resource;
pub mod session;
pub mod transcript;
pub mod types;
pub mod upload;

// Re-export commonly used items at crate root
pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result, SelectionError};
pub use format::{format_timestamp, preview, segment_label};
pub use quiz::{QuizPanel, SegmentFilter, filter_by_segment, group_by_segment};
pub use resource::{Phase, Query, Resource, Ticket};
pub use session::{Fetches, Session};
pub use transcript::TranscriptPanel;
pub use types::{ContentId, Mcq, McqOption, TranscriptSegment, UploadResponse};
pub use upload::{UploadState, Uploader, VideoFile};
