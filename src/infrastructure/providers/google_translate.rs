use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranslationProvider, TranslationProviderError};
use crate::domain::{LanguageTag, Translation, TranslationRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Google Cloud Translation v2 client. Primary provider in the chain.
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleTranslateClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
}

#[derive(Deserialize)]
pub struct TranslateResponse {
    pub data: Option<TranslationData>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize)]
pub struct TranslationData {
    pub translations: Vec<TranslatedItem>,
}

#[derive(Deserialize)]
pub struct TranslatedItem {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    #[serde(rename = "detectedSourceLanguage")]
    pub detected_source_language: Option<String>,
}

#[derive(Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    fn name(&self) -> &'static str {
        "Google Translate"
    }

    #[tracing::instrument(skip(self, request), fields(target = %request.target))]
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslationProviderError> {
        let body = TranslateBody {
            q: &request.text,
            target: request.target.as_str(),
            format: "text",
            source: request.source.as_tag().map(|t| t.as_str()),
        };

        let url = format!("{}?key={}", self.endpoint, self.api_key);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationProviderError::ApiRequestFailed(e.to_string()))?;

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationProviderError::InvalidResponse(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(TranslationProviderError::ProviderError(
                error
                    .message
                    .unwrap_or_else(|| "Google Translation API error".to_string()),
            ));
        }

        let item = parsed
            .data
            .and_then(|d| d.translations.into_iter().next())
            .ok_or_else(|| {
                TranslationProviderError::InvalidResponse(
                    "unexpected response from Google Translation API".to_string(),
                )
            })?;

        let detected_source = item
            .detected_source_language
            .as_deref()
            .and_then(|s| s.parse::<LanguageTag>().ok());

        Ok(Translation::new(item.translated_text, detected_source))
    }
}
