use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request to {endpoint} failed with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{} is not an MP4 video (detected {mime})", path.display())]
    NotMp4 { path: PathBuf, mime: String },

    #[error("An upload is already in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, ApiError>;
