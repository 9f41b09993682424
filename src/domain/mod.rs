mod chat;
mod chunk;
mod document;
mod language;
mod translation;

pub use chat::{ChatMessage, ChatRole, Conversation};
pub use chunk::Chunk;
pub use document::{ContentType, Document, DocumentId};
pub use language::{LanguageTag, SourceLanguage};
pub use translation::{Translation, TranslationRequest};
