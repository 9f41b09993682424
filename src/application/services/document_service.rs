use std::sync::Arc;

use crate::application::ports::{Notifier, TextExtractor, TextExtractorError};
use crate::application::services::chunker;
use crate::application::services::{TranslationError, TranslationService};
use crate::domain::{ContentType, Document, LanguageTag, SourceLanguage, TranslationRequest};

/// Orchestrates document translation: extraction runs once, the text is
/// chunked, each chunk is translated strictly sequentially, and the
/// translated chunks are reassembled with single-space joins.
///
/// The space join is lossy: the original whitespace and paragraph
/// structure are not preserved.
pub struct DocumentService {
    extractor: Arc<dyn TextExtractor>,
    translation: Arc<TranslationService>,
    notifier: Arc<dyn Notifier>,
    chunk_len: usize,
}

/// Outcome of one document translation. `failed_chunks` lists the
/// indices of chunks that contributed no text; under partial failure
/// the output length is therefore not a function of the input length.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTranslation {
    pub text: String,
    pub detected_source: Option<LanguageTag>,
    pub failed_chunks: Vec<usize>,
}

impl DocumentService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        translation: Arc<TranslationService>,
        notifier: Arc<dyn Notifier>,
        chunk_len: usize,
    ) -> Self {
        Self {
            extractor,
            translation,
            notifier,
            chunk_len,
        }
    }

    #[tracing::instrument(
        skip(self, data, source, target),
        fields(filename = %filename, size = data.len())
    )]
    pub async fn translate_document(
        &self,
        data: &[u8],
        filename: String,
        content_type: ContentType,
        source: SourceLanguage,
        target: LanguageTag,
    ) -> Result<(Document, DocumentTranslation), DocumentServiceError> {
        let document = Document::new(filename, content_type, data.len() as u64);

        self.notifier.info("Extracting text...");
        let text = self.extractor.extract(data, &document).await?;

        let translation = self.translate_text(&text, source, target).await?;
        Ok((document, translation))
    }

    /// Chunked translation of already-extracted text. A failing chunk is
    /// reported and skipped; it contributes no text to the output.
    pub async fn translate_text(
        &self,
        text: &str,
        source: SourceLanguage,
        target: LanguageTag,
    ) -> Result<DocumentTranslation, DocumentServiceError> {
        let chunks = chunker::chunk_text(text, self.chunk_len);
        if chunks.is_empty() {
            return Err(DocumentServiceError::EmptyInput);
        }

        self.notifier
            .info(&format!("Processing {} chunks of text...", chunks.len()));

        let request = TranslationRequest::new(String::new(), source, target);
        if request.is_same_language() {
            return Err(DocumentServiceError::Translation(
                TranslationError::SameLanguage(request.target.to_string()),
            ));
        }
        let mut translated: Vec<String> = Vec::with_capacity(chunks.len());
        let mut detected_source = None;
        let mut failed_chunks = Vec::new();

        // One request in flight at a time; the next chunk is issued only
        // after the previous response arrives.
        for chunk in &chunks {
            self.notifier.info(&format!(
                "Translating chunk {}/{}...",
                chunk.index + 1,
                chunks.len()
            ));

            match self
                .translation
                .translate(&request.with_text(chunk.text.clone()))
                .await
            {
                Ok(t) => {
                    if detected_source.is_none() {
                        detected_source = t.detected_source;
                    }
                    translated.push(t.text);
                }
                Err(e) => {
                    tracing::warn!(chunk = chunk.index, error = %e, "Chunk translation failed");
                    self.notifier
                        .error(&format!("Failed to translate chunk {}", chunk.index + 1));
                    failed_chunks.push(chunk.index);
                }
            }
        }

        if translated.is_empty() {
            return Err(DocumentServiceError::AllChunksFailed {
                chunks: chunks.len(),
            });
        }

        Ok(DocumentTranslation {
            text: translated.join(" "),
            detected_source,
            failed_chunks,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentServiceError {
    #[error("no text provided for translation")]
    EmptyInput,
    #[error("extraction: {0}")]
    Extraction(#[from] TextExtractorError),
    #[error("all {chunks} chunks failed to translate")]
    AllChunksFailed { chunks: usize },
    #[error("translation: {0}")]
    Translation(#[from] TranslationError),
}
