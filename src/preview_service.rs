use crate::{
    Fetcher, LinkPreviewer, MissingVideoIdPolicy, PageFetcher, PreviewError, PreviewOutcome,
    PreviewResult,
};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, instrument, warn};

/// PreviewService is the boundary handed to the presentation layer.
/// Every resolution ends as a [`PreviewOutcome`]; errors never escape it.
pub struct PreviewService<F = Fetcher> {
    pub previewer: Arc<LinkPreviewer<F>>,
    // Max Concurrent Requests
    semaphore: Arc<Semaphore>,
}

pub const MAX_CONCURRENT_REQUESTS: usize = 500;

impl<F> Clone for PreviewService<F> {
    fn clone(&self) -> Self {
        Self {
            previewer: Arc::clone(&self.previewer),
            semaphore: Arc::clone(&self.semaphore),
        }
    }
}

impl Default for PreviewService<Fetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewService<Fetcher> {
    pub fn new() -> Self {
        Self::new_with_config(PreviewServiceConfig::new())
    }

    pub fn new_with_config(config: PreviewServiceConfig) -> Self {
        debug!(
            max_concurrent_requests = config.max_concurrent_requests,
            missing_video_id = ?config.missing_video_id,
            "Initializing PreviewService with custom configuration"
        );

        let previewer = LinkPreviewer::new_with_fetcher(config.fetcher.unwrap_or_default())
            .with_missing_video_id_policy(config.missing_video_id);

        Self::with_previewer(previewer, config.max_concurrent_requests)
    }
}

impl<F: PageFetcher> PreviewService<F> {
    pub fn with_previewer(previewer: LinkPreviewer<F>, max_concurrent_requests: usize) -> Self {
        Self {
            previewer: Arc::new(previewer),
            semaphore: Arc::new(Semaphore::new(max_concurrent_requests.max(1))),
        }
    }

    /// Fallible form of [`PreviewService::preview`], for callers that want the error.
    pub async fn generate_preview(&self, url: &str) -> Result<PreviewResult, PreviewError> {
        let _permit = self.semaphore.acquire().await.map_err(|e| {
            PreviewError::FetchError(format!("Preview service is shut down: {e}"))
        })?;
        self.previewer.resolve(url).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn preview(&self, url: &str) -> PreviewOutcome {
        match self.generate_preview(url).await {
            Ok(preview) => {
                #[cfg(feature = "logging")]
                crate::log_preview_card(&preview, url);
                PreviewOutcome::Resolved(preview)
            }
            Err(e) => {
                e.log();
                #[cfg(feature = "logging")]
                crate::log_error_card(url, &e);
                PreviewOutcome::Failed
            }
        }
    }

    /// Resolves every URL concurrently, at most `max_concurrent_requests` at a
    /// time. Outcomes keep the input order; duplicate URLs are fetched once each.
    pub async fn preview_batch(&self, urls: &[&str]) -> Vec<PreviewOutcome> {
        let futures: Vec<_> = urls.iter().map(|url| self.preview(url)).collect();
        let outcomes = futures::future::join_all(futures).await;

        let failed = outcomes
            .iter()
            .filter(|o| matches!(o, PreviewOutcome::Failed))
            .count();
        if failed > 0 {
            warn!(total = urls.len(), failed, "Some previews in batch failed");
        }

        outcomes
    }

    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

pub struct PreviewServiceConfig {
    pub max_concurrent_requests: usize,
    pub fetcher: Option<Fetcher>,
    pub missing_video_id: MissingVideoIdPolicy,
}

impl Default for PreviewServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewServiceConfig {
    pub fn new() -> Self {
        Self {
            max_concurrent_requests: MAX_CONCURRENT_REQUESTS,
            fetcher: None,
            missing_video_id: MissingVideoIdPolicy::default(),
        }
    }

    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn with_max_concurrent_requests(mut self, max_concurrent_requests: usize) -> Self {
        self.max_concurrent_requests = max_concurrent_requests;
        self
    }

    pub fn with_missing_video_id_policy(mut self, policy: MissingVideoIdPolicy) -> Self {
        self.missing_video_id = policy;
        self
    }
}
