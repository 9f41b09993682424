use std::sync::Arc;

use crate::application::ports::{ChatClient, ChatClientError, Notifier};
use crate::domain::{ChatMessage, Conversation, LanguageTag, SourceLanguage};

/// Tries an ordered chain of generative models with the identical
/// conversation and returns the first completion. A credential error
/// from any model aborts the chain immediately: retrying another model
/// with the same missing key cannot succeed.
pub struct ChatService {
    clients: Vec<Arc<dyn ChatClient>>,
    notifier: Arc<dyn Notifier>,
}

impl ChatService {
    pub fn new(clients: Vec<Arc<dyn ChatClient>>, notifier: Arc<dyn Notifier>) -> Self {
        Self { clients, notifier }
    }

    #[tracing::instrument(skip(self, conversation))]
    pub async fn complete(&self, conversation: &Conversation) -> Result<String, ChatError> {
        if conversation.transmittable().next().is_none() {
            return Err(ChatError::EmptyConversation);
        }

        let mut last_failure: Option<(String, ChatClientError)> = None;

        for client in &self.clients {
            match client.complete(conversation).await {
                Ok(text) => {
                    tracing::debug!(model = client.model(), "Completion succeeded");
                    return Ok(text);
                }
                Err(ChatClientError::MissingApiKey) => {
                    return Err(ChatError::MissingApiKey);
                }
                Err(e) => {
                    tracing::warn!(model = client.model(), error = %e, "Model failed");
                    self.notifier
                        .error(&format!("{} failed: {}", client.model(), e));
                    last_failure = Some((client.model().to_string(), e));
                }
            }
        }

        match last_failure {
            Some((model, source)) => Err(ChatError::AllModelsFailed { model, source }),
            None => Err(ChatError::NoModels),
        }
    }

    /// One-shot translation through the generative chain, used for
    /// webpage content where the plain translation APIs are a poor fit.
    pub async fn translate(
        &self,
        text: &str,
        source: &SourceLanguage,
        target: &LanguageTag,
    ) -> Result<String, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let mut conversation = Conversation::default();
        conversation.push(ChatMessage::user(translation_prompt(text, source, target)));
        self.complete(&conversation).await
    }
}

/// Fixed instruction wrapper around the text to translate.
pub fn translation_prompt(text: &str, source: &SourceLanguage, target: &LanguageTag) -> String {
    let from = match source {
        SourceLanguage::Auto => "the detected language".to_string(),
        SourceLanguage::Tag(tag) => tag.to_string(),
    };
    format!(
        "Translate the following text from {} to {}. \
         Only provide the translation, no additional comments:\n\n{}",
        from, target, text
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("no text provided for translation")]
    EmptyInput,
    #[error("conversation has no transmittable messages")]
    EmptyConversation,
    #[error("api key is required")]
    MissingApiKey,
    #[error("no generative models configured")]
    NoModels,
    #[error("all models failed, last error from {model}: {source}")]
    AllModelsFailed {
        model: String,
        source: ChatClientError,
    },
}
