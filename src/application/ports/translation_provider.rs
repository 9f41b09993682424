use async_trait::async_trait;

use crate::domain::{Translation, TranslationRequest};

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Short provider name used in notifications and logs.
    fn name(&self) -> &'static str;

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslationProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationProviderError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("provider error: {0}")]
    ProviderError(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
