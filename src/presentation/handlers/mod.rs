mod chat;
mod document;
mod health;
mod translate;
mod webpage;

pub use chat::chat_handler;
pub use document::translate_document_handler;
pub use health::health_handler;
pub use translate::translate_handler;
pub use webpage::translate_webpage_handler;

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
