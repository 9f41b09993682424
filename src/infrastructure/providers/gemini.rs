use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ChatClient, ChatClientError};
use crate::domain::{ChatRole, Conversation};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Sampling parameters sent with every generateContent request.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Low-temperature settings for translation prompts.
    pub fn translation() -> Self {
        Self {
            temperature: 0.2,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }

    /// Conversational settings for free-form chat.
    pub fn chat() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

/// Client for one Gemini model. Model fallback is a chain of these,
/// tried in order by the chat service.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    generation: GenerationConfig,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, generation: GenerationConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            generation,
        }
    }

    /// Maps a conversation to the provider's role vocabulary: system
    /// entries are stripped, the local assistant role becomes "model".
    pub fn build_request(conversation: &Conversation, generation: GenerationConfig) -> GeminiRequest {
        let contents = conversation
            .transmittable()
            .map(|m| GeminiContent {
                role: match m.role {
                    ChatRole::Assistant => "model",
                    _ => "user",
                },
                parts: vec![GeminiPart {
                    text: m.content.clone(),
                }],
            })
            .collect();

        GeminiRequest {
            contents,
            generation_config: generation,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct GeminiContent {
    pub role: &'static str,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}

#[async_trait]
impl ChatClient for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    #[tracing::instrument(skip(self, conversation), fields(model = %self.model))]
    async fn complete(&self, conversation: &Conversation) -> Result<String, ChatClientError> {
        if self.api_key.trim().is_empty() {
            return Err(ChatClientError::MissingApiKey);
        }

        let request = Self::build_request(conversation, self.generation);
        if request.contents.is_empty() {
            return Err(ChatClientError::EmptyConversation);
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatClientError::ApiRequestFailed(e.to_string()))?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ChatClientError::InvalidResponse(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(ChatClientError::ProviderError(
                error
                    .message
                    .unwrap_or_else(|| "Chat response failed".to_string()),
            ));
        }

        parsed
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|p| p.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                ChatClientError::InvalidResponse(
                    "unexpected response format from Gemini API".to_string(),
                )
            })
    }
}
