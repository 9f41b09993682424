pub mod chunker;

mod chat_service;
mod document_service;
mod translation_service;
mod webpage_service;

pub use chat_service::{translation_prompt, ChatError, ChatService};
pub use document_service::{DocumentService, DocumentServiceError, DocumentTranslation};
pub use translation_service::{TranslationError, TranslationService};
pub use webpage_service::{WebpageService, WebpageServiceError};
