use std::sync::Arc;

use crate::application::ports::{Notifier, TranslationProvider, TranslationProviderError};
use crate::domain::{Translation, TranslationRequest};

/// Tries an ordered chain of translation providers and returns the
/// first success. Provider failures along the way are non-fatal and
/// surface only as transient notifications; the final failure carries
/// the last provider's error.
pub struct TranslationService {
    providers: Vec<Arc<dyn TranslationProvider>>,
    notifier: Arc<dyn Notifier>,
}

impl TranslationService {
    pub fn new(providers: Vec<Arc<dyn TranslationProvider>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            providers,
            notifier,
        }
    }

    #[tracing::instrument(skip(self, request), fields(target = %request.target, source = %request.source))]
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<Translation, TranslationError> {
        if request.is_empty() {
            return Err(TranslationError::EmptyInput);
        }
        if request.is_same_language() {
            return Err(TranslationError::SameLanguage(request.target.to_string()));
        }

        let mut last_failure: Option<(&'static str, TranslationProviderError)> = None;

        for provider in &self.providers {
            match provider.translate(request).await {
                Ok(translation) => {
                    tracing::debug!(provider = provider.name(), "Translation succeeded");
                    return Ok(translation);
                }
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "Provider failed");
                    self.notifier
                        .error(&format!("{} failed: {}", provider.name(), e));
                    last_failure = Some((provider.name(), e));
                }
            }
        }

        match last_failure {
            Some((provider, source)) => Err(TranslationError::AllProvidersFailed {
                provider,
                source,
            }),
            None => Err(TranslationError::NoProviders),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("no text provided for translation")]
    EmptyInput,
    #[error("source and target language are both {0}")]
    SameLanguage(String),
    #[error("no translation providers configured")]
    NoProviders,
    #[error("all providers failed, last error from {provider}: {source}")]
    AllProvidersFailed {
        provider: &'static str,
        source: TranslationProviderError,
    },
}
