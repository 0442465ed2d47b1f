use crate::{
    classifier, Fetcher, MetadataExtractor, PageFetcher, PreviewError, PreviewGenerator,
    PreviewResult, VideoPreview,
};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// What to do with a video link that has no recognizable identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingVideoIdPolicy {
    /// Keep the video preview with an empty id and a thumbnail URL that won't load.
    #[default]
    Degenerate,
    /// Fail the resolution with [`PreviewError::VideoIdNotFound`].
    Fail,
}

/// Resolves one URL into a [`PreviewResult`].
///
/// Holds no per-request state; concurrent calls share only the HTTP client.
#[derive(Clone)]
pub struct LinkPreviewer<F = Fetcher> {
    pub fetcher: F,
    extractor: MetadataExtractor,
    missing_video_id: MissingVideoIdPolicy,
}

impl LinkPreviewer<Fetcher> {
    pub fn new() -> Self {
        Self::new_with_fetcher(Fetcher::new())
    }
}

impl Default for LinkPreviewer<Fetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PageFetcher> LinkPreviewer<F> {
    pub fn new_with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            extractor: MetadataExtractor::new(),
            missing_video_id: MissingVideoIdPolicy::default(),
        }
    }

    pub fn with_missing_video_id_policy(mut self, policy: MissingVideoIdPolicy) -> Self {
        self.missing_video_id = policy;
        self
    }

    pub fn missing_video_id_policy(&self) -> MissingVideoIdPolicy {
        self.missing_video_id
    }

    /// Video links are answered without touching the network; every other URL
    /// costs exactly one GET.
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve(&self, url: &str) -> Result<PreviewResult, PreviewError> {
        if classifier::is_video_url(url) {
            return self.video_preview(url).map(PreviewResult::Video);
        }

        let html = self.fetcher.fetch_page(url).await?;
        let preview = self.extractor.extract(&html, url);
        Ok(PreviewResult::Generic(preview))
    }

    fn video_preview(&self, url: &str) -> Result<VideoPreview, PreviewError> {
        let video_id = match classifier::match_video_id(url) {
            Some(id) => id,
            None => match self.missing_video_id {
                MissingVideoIdPolicy::Degenerate => {
                    warn!(url = %url, "Video URL without identifier, thumbnail will not load");
                    String::new()
                }
                MissingVideoIdPolicy::Fail => {
                    return Err(PreviewError::VideoIdNotFound(url.to_string()));
                }
            },
        };

        let thumbnail_url = classifier::thumbnail_url(&video_id);
        debug!(url = %url, video_id = %video_id, "Built video preview");

        Ok(VideoPreview {
            video_id,
            thumbnail_url,
        })
    }
}

#[async_trait]
impl<F: PageFetcher> PreviewGenerator for LinkPreviewer<F> {
    async fn generate_preview(&self, url: &str) -> Result<PreviewResult, PreviewError> {
        self.resolve(url).await
    }
}
