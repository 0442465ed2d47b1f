use crate::{utils, GenericPreview};
use scraper::{Html, Selector};
use tracing::debug;

/// Fields found in a page's markup. `None` means the node or attribute is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PageMetadata {
    /// Collapses absent fields to empty strings and attaches the source label.
    pub fn into_preview(self, url: &str) -> GenericPreview {
        GenericPreview {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            source: utils::source_label(url).unwrap_or_default(),
        }
    }
}

/// Metadata extractor, responsible for extracting preview information from webpage content
#[derive(Clone)]
pub struct MetadataExtractor;

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parsing is best-effort: malformed markup still yields a document.
    pub fn extract(&self, html: &str, url: &str) -> GenericPreview {
        let metadata = self.parse(html);
        debug!(
            url = %url,
            has_title = metadata.title.is_some(),
            has_description = metadata.description.is_some(),
            has_image = metadata.image.is_some(),
            "Extracted page metadata"
        );
        metadata.into_preview(url)
    }

    pub fn parse(&self, html: &str) -> PageMetadata {
        let document = Html::parse_document(html);
        PageMetadata {
            title: self.extract_title(&document),
            description: self.extract_description(&document),
            image: self.extract_image(&document),
        }
    }

    fn extract_title(&self, document: &Html) -> Option<String> {
        let title_selector = Selector::parse("title").ok()?;

        document
            .select(&title_selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .map(|s| s.trim().to_string())
    }

    fn extract_description(&self, document: &Html) -> Option<String> {
        let meta_desc_selector = Selector::parse("meta[name='description']").ok()?;

        document
            .select(&meta_desc_selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(String::from)
    }

    fn extract_image(&self, document: &Html) -> Option<String> {
        let og_image_selector = Selector::parse("meta[property='og:image']").ok()?;

        document
            .select(&og_image_selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(String::from)
    }
}
