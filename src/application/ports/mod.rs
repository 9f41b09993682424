mod chat_client;
mod notifier;
mod page_fetcher;
mod text_extractor;
mod translation_provider;

pub use chat_client::{ChatClient, ChatClientError};
pub use notifier::{Notifier, NullNotifier};
pub use page_fetcher::{PageFetcher, PageFetchError};
pub use text_extractor::{TextExtractor, TextExtractorError};
pub use translation_provider::{TranslationProvider, TranslationProviderError};
