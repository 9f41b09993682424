use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{Notifier, TextExtractor, TextExtractorError};
use crate::domain::Document;

/// Primary/fallback extraction pair. The fallback runs whenever the
/// primary errors or produces whitespace-only text; if both come up
/// empty the result is `NoTextFound`.
pub struct CompositeExtractor {
    primary: Arc<dyn TextExtractor>,
    fallback: Arc<dyn TextExtractor>,
    notifier: Arc<dyn Notifier>,
}

impl CompositeExtractor {
    pub fn new(
        primary: Arc<dyn TextExtractor>,
        fallback: Arc<dyn TextExtractor>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            primary,
            fallback,
            notifier,
        }
    }
}

#[async_trait]
impl TextExtractor for CompositeExtractor {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractorError> {
        match self.primary.extract(data, document).await {
            Ok(text) if !text.trim().is_empty() => return Ok(text),
            Ok(_) => {
                tracing::warn!("Primary extractor produced empty text, falling back");
                self.notifier
                    .error("Primary extraction produced no text, trying fallback");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Primary extractor failed, falling back");
                self.notifier
                    .error(&format!("Primary extraction failed: {e}"));
            }
        }

        match self.fallback.extract(data, document).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => Err(TextExtractorError::NoTextFound(document.filename.clone())),
            Err(TextExtractorError::UnsupportedContentType(mime)) => {
                Err(TextExtractorError::UnsupportedContentType(mime))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fallback extractor failed");
                Err(TextExtractorError::NoTextFound(document.filename.clone()))
            }
        }
    }
}
