use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of one uploaded video, as returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    pub id: String,
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub time_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mcq {
    pub id: String,
    pub question: String,
    pub options: Vec<McqOption>,
    pub correct_answer: String,
    pub segment_id: String,
}

impl Mcq {
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_answer == option_id
    }

    /// The option the service marked as correct, if it is present in the option list.
    pub fn correct_option(&self) -> Option<&McqOption> {
        self.options.iter().find(|opt| self.is_correct(&opt.id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<ContentId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptResponse {
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McqResponse {
    #[serde(default)]
    pub questions: Vec<Mcq>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_uses_camel_case_fields() {
        let json = r#"{
            "id": "seg1",
            "text": "Welcome to the lecture",
            "startTime": 0,
            "endTime": 300.5,
            "timeRange": "00:00 - 05:00"
        }"#;

        let segment: TranscriptSegment = serde_json::from_str(json).unwrap();
        assert_eq!(segment.id, "seg1");
        assert_eq!(segment.end_time, 300.5);
        assert_eq!(segment.time_range, "00:00 - 05:00");
    }

    #[test]
    fn upload_response_without_video_id() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"success": true, "message": "queued"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.video_id, None);

        let resp: UploadResponse = serde_json::from_str(
            r#"{"success": true, "message": "ok", "videoId": "abc123"}"#,
        )
        .unwrap();
        assert_eq!(resp.video_id, Some(ContentId::new("abc123")));
    }

    #[test]
    fn correct_option_matches_correct_answer() {
        let mcq: Mcq = serde_json::from_str(
            r#"{
                "id": "q1",
                "question": "What is six times seven?",
                "options": [{"id": "opt1", "text": "41"}, {"id": "opt2", "text": "42"}],
                "correctAnswer": "opt2",
                "segmentId": "seg1"
            }"#,
        )
        .unwrap();

        assert_eq!(mcq.correct_option().map(|o| o.text.as_str()), Some("42"));
        assert!(mcq.is_correct("opt2"));
        assert!(!mcq.is_correct("opt1"));
    }

    #[test]
    fn missing_envelope_lists_default_to_empty() {
        let resp: TranscriptResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.segments.is_empty());
    }
}
