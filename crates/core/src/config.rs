use std::time::Duration;

use reqwest::Url;

use crate::error::{ApiError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the lecture service lives and how long a single call may take.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self { base_url, timeout })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve an endpoint below the base URL. Each segment is percent-encoded on its own.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments() {
        let config = ApiConfig::default();
        let url = config.endpoint(&["transcribe", "abc123"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/transcribe/abc123");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = ApiConfig::new("https://lectures.example.com/api/", DEFAULT_TIMEOUT).unwrap();
        let url = config.endpoint(&["upload"]).unwrap();
        assert_eq!(url.as_str(), "https://lectures.example.com/api/upload");
    }

    #[test]
    fn endpoint_encodes_content_id() {
        let config = ApiConfig::default();
        let url = config.endpoint(&["generate-questions", "a/b c"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/generate-questions/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            ApiConfig::new("mailto:someone@example.com", DEFAULT_TIMEOUT),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(ApiConfig::new("not a url", DEFAULT_TIMEOUT).is_err());
    }
}
