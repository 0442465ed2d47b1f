use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod classifier;
mod error;
mod extractor;
mod fetcher;
#[cfg(feature = "logging")]
mod logging;
mod preview_generator;
mod preview_service;
mod state;
mod utils;

pub use classifier::{extract_video_id, is_video_url, match_video_id, thumbnail_url, VideoShape};
pub use error::PreviewError;
pub use extractor::{MetadataExtractor, PageMetadata};
pub use fetcher::{Fetcher, FetcherConfig, PageFetcher};
#[cfg(feature = "logging")]
pub use logging::{log_error_card, log_preview_card, setup_logging, LogConfig, LogLevelGuard};
pub use preview_generator::{LinkPreviewer, MissingVideoIdPolicy};
pub use preview_service::{PreviewService, PreviewServiceConfig, MAX_CONCURRENT_REQUESTS};
pub use state::{PreviewOutcome, PreviewSlot, Ticket};
pub use utils::source_label;

/// What a link card renders for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewResult {
    Video(VideoPreview),
    Generic(GenericPreview),
}

impl PreviewResult {
    pub fn video_id(&self) -> Option<&str> {
        match self {
            PreviewResult::Video(video) => Some(&video.video_id),
            PreviewResult::Generic(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPreview {
    pub video_id: String,
    pub thumbnail_url: String,
}

/// Empty fields are rows the card leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericPreview {
    pub title: String,
    pub description: String,
    pub image: String,
    pub source: String,
}

#[async_trait]
pub trait PreviewGenerator {
    async fn generate_preview(&self, url: &str) -> Result<PreviewResult, PreviewError>;
}
