use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, Document};
use crate::presentation::config::VisionSettings;

const OCR_TIMEOUT: Duration = Duration::from_secs(60);

/// Whether remote OCR can be used, decided once at wiring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrCapability {
    Ready,
    MissingCredential,
    Disabled,
}

impl OcrCapability {
    pub fn probe(settings: &VisionSettings) -> Self {
        if !settings.enabled {
            OcrCapability::Disabled
        } else if settings.api_key.trim().is_empty() {
            OcrCapability::MissingCredential
        } else {
            OcrCapability::Ready
        }
    }
}

/// Vision-style OCR extraction: the document is sent base64-encoded
/// with a full-text detection feature request; the per-document text
/// annotations come back concatenated. Primary PDF path.
pub struct VisionOcrAdapter {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl VisionOcrAdapter {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(OCR_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct AnnotateResponse {
    pub responses: Option<Vec<DocumentResponse>>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize)]
pub struct DocumentResponse {
    #[serde(rename = "fullTextAnnotation")]
    pub full_text_annotation: Option<FullTextAnnotation>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize)]
pub struct FullTextAnnotation {
    pub text: String,
}

#[derive(Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}

#[async_trait]
impl TextExtractor for VisionOcrAdapter {
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

        let content = general_purpose::STANDARD.encode(data);
        let body = serde_json::json!({
            "requests": [{
                "inputConfig": {
                    "content": content,
                    "mimeType": "application/pdf"
                },
                "features": [{ "type": "DOCUMENT_TEXT_DETECTION" }]
            }]
        });

        let url = format!("{}?key={}", self.endpoint, self.api_key);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("OCR request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(TextExtractorError::ExtractionFailed(format!(
                "OCR API returned {status}: {text}"
            )));
        }

        let parsed: AnnotateResponse = response
            .json()
            .await
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("OCR JSON parse: {e}")))?;

        if let Some(error) = parsed.error {
            return Err(TextExtractorError::ExtractionFailed(
                error.message.unwrap_or_else(|| "OCR API error".to_string()),
            ));
        }

        let blocks: Vec<String> = parsed
            .responses
            .unwrap_or_default()
            .into_iter()
            .filter_map(|r| r.full_text_annotation)
            .map(|a| a.text.trim_end().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        if blocks.is_empty() {
            return Err(TextExtractorError::NoTextFound(document.filename.clone()));
        }

        Ok(blocks.join("\n"))
    }
}
