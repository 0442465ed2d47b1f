use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Failed to parse URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Failed to fetch content: {0}")]
    FetchError(String),

    #[error("Request timeout: {0}")]
    TimeoutError(String),

    #[error("No video identifier found in URL: {0}")]
    VideoIdNotFound(String),
}

impl PreviewError {
    /// Network failures, timeouts included.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            PreviewError::FetchError(_) | PreviewError::TimeoutError(_)
        )
    }

    pub fn log(&self) {
        match self {
            PreviewError::UrlParseError(e) => {
                warn!(error = %e, "URL parsing failed");
            }
            PreviewError::FetchError(e) => {
                error!(error = %e, "Content fetch failed");
            }
            PreviewError::TimeoutError(e) => {
                warn!(error = %e, "Request timed out");
            }
            PreviewError::VideoIdNotFound(url) => {
                warn!(url = %url, "Video URL without a recognizable identifier");
            }
        }
    }
}

impl From<reqwest::Error> for PreviewError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PreviewError::TimeoutError(e.to_string())
        } else {
            PreviewError::FetchError(e.to_string())
        }
    }
}
