use crate::PreviewError;
use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Source of raw page bodies: `GET(url) → body text`.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String, PreviewError>;
}

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        debug!("Fetcher initialized with default configuration");
        Self::new_with_config(FetcherConfig::default())
    }

    pub fn new_with_custom_config(timeout: Duration, user_agent: &str) -> Self {
        Self::new_with_config(FetcherConfig {
            user_agent: user_agent.to_string(),
            timeout,
            ..FetcherConfig::default()
        })
    }

    /// Creates a Fetcher with custom configuration
    ///
    /// Panics if the HTTP client cannot be built; see [`Fetcher::try_new_with_config`].
    pub fn new_with_config(config: FetcherConfig) -> Self {
        Self::try_new_with_config(config).unwrap_or_else(|e| {
            error!(error = %e, "Failed to create HTTP client");
            panic!("Failed to initialize HTTP client: {}", e);
        })
    }

    pub fn try_new_with_config(config: FetcherConfig) -> Result<Self, PreviewError> {
        let mut client_builder = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .pool_max_idle_per_host(10);

        if let Some(headers) = config.headers {
            client_builder = client_builder.default_headers(headers);
        }

        if let Some(redirect_policy) = config.redirect_policy {
            client_builder = client_builder.redirect(redirect_policy);
        }

        let client = client_builder
            .build()
            .map_err(|e| PreviewError::FetchError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Reads the body whatever the status code; only transport failures are errors.
    #[instrument(level = "debug", skip(self), err)]
    pub async fn fetch(&self, url: &str) -> Result<String, PreviewError> {
        debug!(url = %url, "Starting fetch request");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Failed to send request");
            PreviewError::from(e)
        })?;

        let status = response.status();
        let content = response.text().await.map_err(|e| {
            error!(error = %e, url = %url, "Failed to read response body");
            PreviewError::from(e)
        })?;

        debug!(
            url = %url,
            status = %status,
            content_length = content.len(),
            "Fetched webpage"
        );
        Ok(content)
    }
}

#[async_trait]
impl PageFetcher for Fetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, PreviewError> {
        self.fetch(url).await
    }
}

/// HTTP client settings.
///
/// # Examples
/// ```ignore
/// let fetcher = Fetcher::new_with_config(FetcherConfig {
///     user_agent: "my-custom-agent/1.0".to_string(),
///     timeout: Duration::from_secs(5),
///     ..FetcherConfig::default()
/// });
/// ```
pub struct FetcherConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub headers: Option<HeaderMap>,
    pub redirect_policy: Option<reqwest::redirect::Policy>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: "link_card/0.1.0".to_string(),
            timeout: Duration::from_secs(10),
            headers: None,
            redirect_policy: None,
        }
    }
}
