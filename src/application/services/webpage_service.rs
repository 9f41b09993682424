use std::sync::Arc;

use url::Url;

use crate::application::ports::{
    Notifier, PageFetchError, PageFetcher, TextExtractor, TextExtractorError,
};
use crate::application::services::{ChatError, ChatService};
use crate::domain::{ContentType, Document, LanguageTag, SourceLanguage};

/// Translates the textual content of a webpage: fetch, heading-aware
/// extraction, then one-shot translation through the generative chain.
pub struct WebpageService {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn TextExtractor>,
    chat: Arc<ChatService>,
    notifier: Arc<dyn Notifier>,
}

impl WebpageService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn TextExtractor>,
        chat: Arc<ChatService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            chat,
            notifier,
        }
    }

    #[tracing::instrument(skip(self, target), fields(url = %url))]
    pub async fn translate_page(
        &self,
        url: &str,
        target: LanguageTag,
    ) -> Result<String, WebpageServiceError> {
        if url.trim().is_empty() {
            return Err(WebpageServiceError::EmptyUrl);
        }
        let url = Url::parse(url).map_err(|e| WebpageServiceError::InvalidUrl(e.to_string()))?;

        self.notifier.info("Processing webpage...");
        let body = self.fetcher.fetch(&url).await?;

        let document = Document::new(url.to_string(), ContentType::Html, body.len() as u64);
        let text = self.extractor.extract(&body, &document).await?;

        let translated = self
            .chat
            .translate(&text, &SourceLanguage::Auto, &target)
            .await?;
        Ok(translated)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WebpageServiceError {
    #[error("no URL provided")]
    EmptyUrl,
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("fetch: {0}")]
    Fetch(#[from] PageFetchError),
    #[error("extraction: {0}")]
    Extraction(#[from] TextExtractorError),
    #[error("translation: {0}")]
    Translation(#[from] ChatError),
}
