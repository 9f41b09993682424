use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, Document};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Local structural PDF parse: walks the page tree and joins the text
/// of each page, one newline between pages. Fallback path behind the
/// remote OCR adapter.
#[derive(Default)]
pub struct PdfTextAdapter;

impl PdfTextAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, TextExtractorError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let mut pages = Vec::new();
        for (page_number, _) in doc.get_pages() {
            let text = doc.extract_text(&[page_number]).unwrap_or_default();
            if !text.trim().is_empty() {
                pages.push(text.trim_end().to_string());
            }
        }
        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfTextAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename
        )
    )]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, TextExtractorError> {
        if document.content_type != ContentType::Pdf {
            return Err(TextExtractorError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let data_owned = data.to_vec();
        let filename = document.filename.clone();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&data_owned)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(TextExtractorError::NoTextFound(filename));
        }

        Ok(pages.join("\n"))
    }
}
