use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use linguara::application::ports::{NullNotifier, TextExtractor, TextExtractorError};
use linguara::domain::{ContentType, Document};
use linguara::infrastructure::extraction::{CompositeExtractor, OcrCapability};
use linguara::presentation::config::VisionSettings;

struct StubExtractor {
    calls: AtomicUsize,
    response: Result<&'static str, &'static str>,
}

impl StubExtractor {
    fn returning(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Ok(text),
        })
    }

    fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Err(message),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextExtractor for StubExtractor {
    async fn extract(&self, _data: &[u8], _document: &Document) -> Result<String, TextExtractorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.response {
            Ok(text) => Ok(text.to_string()),
            Err(m) => Err(TextExtractorError::ExtractionFailed(m.to_string())),
        }
    }
}

fn pdf_document() -> Document {
    Document::new("scan.pdf".to_string(), ContentType::Pdf, 0)
}

#[tokio::test]
async fn given_working_primary_when_extracting_then_fallback_is_never_called() {
    let primary = StubExtractor::returning("ocr text");
    let fallback = StubExtractor::returning("parsed text");
    let composite =
        CompositeExtractor::new(primary.clone(), fallback.clone(), Arc::new(NullNotifier));

    let text = composite.extract(b"%PDF", &pdf_document()).await.unwrap();

    assert_eq!(text, "ocr text");
    assert_eq!(fallback.calls(), 0);
}

#[tokio::test]
async fn given_failing_primary_when_extracting_then_fallback_result_is_used() {
    let primary = StubExtractor::failing("OCR quota exhausted");
    let fallback = StubExtractor::returning("parsed text");
    let composite =
        CompositeExtractor::new(primary.clone(), fallback.clone(), Arc::new(NullNotifier));

    let text = composite.extract(b"%PDF", &pdf_document()).await.unwrap();

    assert_eq!(text, "parsed text");
    assert_eq!(primary.calls(), 1);
    assert_eq!(fallback.calls(), 1);
}

#[tokio::test]
async fn given_whitespace_only_primary_result_when_extracting_then_falls_back() {
    let primary = StubExtractor::returning("   \n  ");
    let fallback = StubExtractor::returning("parsed text");
    let composite =
        CompositeExtractor::new(primary, fallback.clone(), Arc::new(NullNotifier));

    let text = composite.extract(b"%PDF", &pdf_document()).await.unwrap();

    assert_eq!(text, "parsed text");
    assert_eq!(fallback.calls(), 1);
}

#[tokio::test]
async fn given_both_paths_empty_when_extracting_then_no_text_found() {
    let primary = StubExtractor::failing("OCR down");
    let fallback = StubExtractor::returning("");
    let composite = CompositeExtractor::new(primary, fallback, Arc::new(NullNotifier));

    let result = composite.extract(b"%PDF", &pdf_document()).await;

    assert!(matches!(result, Err(TextExtractorError::NoTextFound(_))));
}

#[test]
fn given_vision_settings_when_probed_then_capability_is_tri_state() {
    let ready = VisionSettings {
        enabled: true,
        endpoint: "https://vision.example/v1/files:annotate".to_string(),
        api_key: "key".to_string(),
    };
    let missing = VisionSettings {
        api_key: "  ".to_string(),
        ..ready.clone()
    };
    let disabled = VisionSettings {
        enabled: false,
        ..ready.clone()
    };

    assert_eq!(OcrCapability::probe(&ready), OcrCapability::Ready);
    assert_eq!(OcrCapability::probe(&missing), OcrCapability::MissingCredential);
    assert_eq!(OcrCapability::probe(&disabled), OcrCapability::Disabled);
}
