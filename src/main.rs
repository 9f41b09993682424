use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use linguara::application::ports::{ChatClient, Notifier, TextExtractor, TranslationProvider};
use linguara::application::services::{
    ChatService, DocumentService, TranslationService, WebpageService,
};
use linguara::infrastructure::extraction::{
    CompositeExtractor, HtmlAdapter, OcrCapability, PdfTextAdapter, VisionOcrAdapter,
};
use linguara::infrastructure::observability::{init_tracing, TracingConfig, TracingNotifier};
use linguara::infrastructure::providers::{
    GeminiClient, GenerationConfig, GoogleTranslateClient, MyMemoryClient,
};
use linguara::infrastructure::web::HttpPageFetcher;
use linguara::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging),
        settings.server.port,
    );

    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

    let providers: Vec<Arc<dyn TranslationProvider>> = vec![
        Arc::new(GoogleTranslateClient::new(
            &settings.providers.google.endpoint,
            &settings.providers.google.api_key,
        )),
        Arc::new(MyMemoryClient::new(&settings.providers.mymemory.endpoint)),
    ];
    let translation_service = Arc::new(TranslationService::new(providers, Arc::clone(&notifier)));

    let gemini = &settings.providers.gemini;
    let model_chain = |generation: GenerationConfig| -> Vec<Arc<dyn ChatClient>> {
        vec![
            Arc::new(GeminiClient::new(
                &gemini.endpoint,
                &gemini.primary_model,
                &gemini.api_key,
                generation,
            )),
            Arc::new(GeminiClient::new(
                &gemini.endpoint,
                &gemini.fallback_model,
                &gemini.api_key,
                generation,
            )),
        ]
    };
    let chat_service = Arc::new(ChatService::new(
        model_chain(GenerationConfig::chat()),
        Arc::clone(&notifier),
    ));
    let gemini_translation = Arc::new(ChatService::new(
        model_chain(GenerationConfig::translation()),
        Arc::clone(&notifier),
    ));

    let local_pdf: Arc<dyn TextExtractor> = Arc::new(PdfTextAdapter::new());
    let extractor: Arc<dyn TextExtractor> =
        match OcrCapability::probe(&settings.providers.vision) {
            OcrCapability::Ready => {
                let ocr = Arc::new(VisionOcrAdapter::new(
                    &settings.providers.vision.endpoint,
                    &settings.providers.vision.api_key,
                ));
                Arc::new(CompositeExtractor::new(
                    ocr,
                    Arc::clone(&local_pdf),
                    Arc::clone(&notifier),
                ))
            }
            capability => {
                tracing::warn!(?capability, "Remote OCR unavailable, local PDF parse only");
                local_pdf
            }
        };

    let document_service = Arc::new(DocumentService::new(
        extractor,
        Arc::clone(&translation_service),
        Arc::clone(&notifier),
        settings.chunking.max_chunk_chars,
    ));

    let webpage_service = Arc::new(WebpageService::new(
        Arc::new(HttpPageFetcher::new()),
        Arc::new(HtmlAdapter::new()),
        gemini_translation,
        Arc::clone(&notifier),
    ));

    let state = AppState {
        translation_service,
        document_service,
        webpage_service,
        chat_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
