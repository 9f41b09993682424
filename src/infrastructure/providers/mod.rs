mod gemini;
mod google_translate;
mod mymemory;

pub use gemini::{
    GeminiClient, GeminiContent, GeminiPart, GeminiRequest, GenerateContentResponse,
    GenerationConfig,
};
pub use google_translate::{GoogleTranslateClient, TranslateResponse};
pub use mymemory::{MyMemoryClient, MyMemoryResponse};
