use reqwest::{
    Response, Url,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::ApiConfig,
    error::{ApiError, Result},
    types::{ContentId, Mcq, McqResponse, TranscriptResponse, TranscriptSegment, UploadResponse},
    upload::{MP4_MIME, VideoFile},
};

/// Multipart field the service reads the video from.
pub const UPLOAD_FIELD: &str = "video";

/// Thin client over the lecture service. Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// POST the video as multipart form data to `/upload`.
    pub async fn upload(&self, file: &VideoFile) -> Result<UploadResponse> {
        let url = self.config.endpoint(&["upload"])?;
        let bytes = tokio::fs::read(file.path()).await?;
        debug!(file = %file.name(), bytes = bytes.len(), url = %url, "Uploading video");

        let part = Part::bytes(bytes)
            .file_name(file.name().to_string())
            .mime_str(MP4_MIME)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let result = async {
            let response = self.http.post(url.clone()).multipart(form).send().await?;
            decode::<UploadResponse>(&url, response).await
        }
        .await;

        result.inspect_err(|e| debug!(url = %url, error = %e, "Upload failed"))
    }

    /// GET `/transcribe/{id}`.
    pub async fn fetch_transcripts(&self, id: &ContentId) -> Result<Vec<TranscriptSegment>> {
        let envelope: TranscriptResponse = self.get(&["transcribe", id.as_str()]).await?;
        debug!(content_id = %id, segments = envelope.segments.len(), "Fetched transcripts");
        Ok(envelope.segments)
    }

    /// GET `/generate-questions/{id}`.
    pub async fn fetch_questions(&self, id: &ContentId) -> Result<Vec<Mcq>> {
        let envelope: McqResponse = self.get(&["generate-questions", id.as_str()]).await?;
        debug!(content_id = %id, questions = envelope.questions.len(), "Fetched questions");
        Ok(envelope.questions)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.config.endpoint(segments)?;
        debug!(url = %url, "GET");

        let result = async {
            let response = self.http.get(url.clone()).send().await?;
            decode::<T>(&url, response).await
        }
        .await;

        result.inspect_err(|e| debug!(url = %url, error = %e, "Request failed"))
    }
}

async fn decode<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            endpoint: url.path().to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.json::<T>().await?)
}
