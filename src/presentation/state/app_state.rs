use std::sync::Arc;

use crate::application::services::{
    ChatService, DocumentService, TranslationService, WebpageService,
};
use crate::presentation::config::Settings;

pub struct AppState {
    pub translation_service: Arc<TranslationService>,
    pub document_service: Arc<DocumentService>,
    pub webpage_service: Arc<WebpageService>,
    pub chat_service: Arc<ChatService>,
    pub settings: Settings,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            translation_service: Arc::clone(&self.translation_service),
            document_service: Arc::clone(&self.document_service),
            webpage_service: Arc::clone(&self.webpage_service),
            chat_service: Arc::clone(&self.chat_service),
            settings: self.settings.clone(),
        }
    }
}
