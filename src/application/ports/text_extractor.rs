use async_trait::async_trait;

use crate::domain::Document;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: &[u8], document: &Document)
        -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no extractable text in {0}")]
    NoTextFound(String),
}
