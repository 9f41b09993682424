use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{TranslationProvider, TranslationProviderError};
use crate::domain::{LanguageTag, Translation, TranslationRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// MyMemory community translation API. Secondary provider; keyless GET
/// interface with a `source|target` language pair (empty source means
/// auto-detect).
pub struct MyMemoryClient {
    client: Client,
    endpoint: String,
}

impl MyMemoryClient {
    pub fn new(endpoint: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn langpair(request: &TranslationRequest) -> String {
        let source = request
            .source
            .as_tag()
            .map(|t| t.as_str())
            .unwrap_or_default();
        format!("{}|{}", source, request.target)
    }
}

#[derive(Deserialize)]
pub struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    pub response_data: Option<ResponseData>,
    #[serde(rename = "responseDetails")]
    pub response_details: Option<String>,
}

#[derive(Deserialize)]
pub struct ResponseData {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
    #[serde(rename = "detectedLanguage")]
    pub detected_language: Option<String>,
}

#[async_trait]
impl TranslationProvider for MyMemoryClient {
    fn name(&self) -> &'static str {
        "MyMemory"
    }

    #[tracing::instrument(skip(self, request), fields(target = %request.target))]
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslationProviderError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", request.text.as_str()),
                ("langpair", &Self::langpair(request)),
            ])
            .send()
            .await
            .map_err(|e| TranslationProviderError::ApiRequestFailed(e.to_string()))?;

        let parsed: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| TranslationProviderError::InvalidResponse(e.to_string()))?;

        match parsed.response_data {
            Some(data) => {
                let detected_source = data
                    .detected_language
                    .as_deref()
                    .and_then(|s| s.parse::<LanguageTag>().ok());
                Ok(Translation::new(data.translated_text, detected_source))
            }
            None => Err(TranslationProviderError::ProviderError(
                parsed
                    .response_details
                    .unwrap_or_else(|| "Translation failed".to_string()),
            )),
        }
    }
}
