use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use linguara::application::ports::{
    Notifier, NullNotifier, TranslationProvider, TranslationProviderError,
};
use linguara::application::services::{TranslationError, TranslationService};
use linguara::domain::{LanguageTag, SourceLanguage, Translation, TranslationRequest};

struct StubProvider {
    name: &'static str,
    calls: AtomicUsize,
    response: Result<Translation, &'static str>,
}

impl StubProvider {
    fn succeeding(name: &'static str, text: &str) -> Self {
        Self {
            name,
            calls: AtomicUsize::new(0),
            response: Ok(Translation::new(text, None)),
        }
    }

    fn failing(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            calls: AtomicUsize::new(0),
            response: Err(message),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for StubProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn translate(
        &self,
        _request: &TranslationRequest,
    ) -> Result<Translation, TranslationProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(t) => Ok(t.clone()),
            Err(m) => Err(TranslationProviderError::ProviderError(m.to_string())),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    errors: std::sync::Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn info(&self, _message: &str) {}
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

fn request(text: &str) -> TranslationRequest {
    TranslationRequest::new(
        text,
        SourceLanguage::Auto,
        "fr".parse::<LanguageTag>().unwrap(),
    )
}

#[tokio::test]
async fn given_failing_primary_when_translating_then_returns_secondary_text() {
    let primary = Arc::new(StubProvider::failing("primary", "quota exceeded"));
    let secondary = Arc::new(StubProvider::succeeding("secondary", "bonjour"));
    let service = TranslationService::new(
        vec![primary.clone(), secondary.clone()],
        Arc::new(NullNotifier),
    );

    let result = service.translate(&request("hello")).await;

    assert_eq!(result.unwrap().text, "bonjour");
    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 1);
}

#[tokio::test]
async fn given_succeeding_primary_when_translating_then_secondary_is_never_called() {
    let primary = Arc::new(StubProvider::succeeding("primary", "bonjour"));
    let secondary = Arc::new(StubProvider::succeeding("secondary", "salut"));
    let service = TranslationService::new(
        vec![primary.clone(), secondary.clone()],
        Arc::new(NullNotifier),
    );

    let result = service.translate(&request("hello")).await;

    assert_eq!(result.unwrap().text, "bonjour");
    assert_eq!(secondary.calls(), 0);
}

#[tokio::test]
async fn given_empty_text_when_translating_then_fails_without_network_call() {
    let provider = Arc::new(StubProvider::succeeding("primary", "bonjour"));
    let service = TranslationService::new(vec![provider.clone()], Arc::new(NullNotifier));

    let result = service.translate(&request("")).await;

    assert!(matches!(result, Err(TranslationError::EmptyInput)));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn given_whitespace_only_text_when_translating_then_fails_without_network_call() {
    let provider = Arc::new(StubProvider::succeeding("primary", "bonjour"));
    let service = TranslationService::new(vec![provider.clone()], Arc::new(NullNotifier));

    let result = service.translate(&request("   \n\t ")).await;

    assert!(matches!(result, Err(TranslationError::EmptyInput)));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn given_identical_source_and_target_when_translating_then_rejected_up_front() {
    let provider = Arc::new(StubProvider::succeeding("primary", "bonjour"));
    let service = TranslationService::new(vec![provider.clone()], Arc::new(NullNotifier));

    let request = TranslationRequest::new(
        "hello",
        SourceLanguage::Tag("fr".parse().unwrap()),
        "fr".parse().unwrap(),
    );
    let result = service.translate(&request).await;

    assert!(matches!(result, Err(TranslationError::SameLanguage(_))));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn given_all_providers_failing_when_translating_then_last_error_surfaces() {
    let primary = Arc::new(StubProvider::failing("primary", "quota exceeded"));
    let secondary = Arc::new(StubProvider::failing("secondary", "service down"));
    let service = TranslationService::new(vec![primary, secondary], Arc::new(NullNotifier));

    let result = service.translate(&request("hello")).await;

    match result {
        Err(TranslationError::AllProvidersFailed { provider, source }) => {
            assert_eq!(provider, "secondary");
            assert!(source.to_string().contains("service down"));
        }
        other => panic!("expected AllProvidersFailed, got {:?}", other.map(|t| t.text)),
    }
}

#[tokio::test]
async fn given_provider_failure_when_falling_back_then_notification_is_emitted() {
    let primary = Arc::new(StubProvider::failing("primary", "quota exceeded"));
    let secondary = Arc::new(StubProvider::succeeding("secondary", "bonjour"));
    let notifier = Arc::new(RecordingNotifier::default());
    let service = TranslationService::new(vec![primary, secondary], notifier.clone());

    service.translate(&request("hello")).await.unwrap();

    let errors = notifier.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("primary"));
}

#[tokio::test]
async fn given_detecting_provider_when_translating_auto_then_detected_tag_is_reported() {
    let provider = Arc::new(StubProvider {
        name: "primary",
        calls: AtomicUsize::new(0),
        response: Ok(Translation::new(
            "bonjour",
            Some("en".parse::<LanguageTag>().unwrap()),
        )),
    });
    let service = TranslationService::new(vec![provider], Arc::new(NullNotifier));

    let translation = service.translate(&request("hello")).await.unwrap();

    assert_eq!(translation.detected_source.unwrap().as_str(), "en");
}
