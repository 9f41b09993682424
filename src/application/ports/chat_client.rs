use async_trait::async_trait;

use crate::domain::Conversation;

/// Single-shot completion against one generative model. The full
/// response text arrives atomically or the call fails as a whole.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Model identifier used in notifications and logs.
    fn model(&self) -> &str;

    async fn complete(&self, conversation: &Conversation) -> Result<String, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("api key is required")]
    MissingApiKey,
    #[error("conversation has no transmittable messages")]
    EmptyConversation,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("provider error: {0}")]
    ProviderError(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
