use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use linguara::application::ports::{
    ChatClient, ChatClientError, NullNotifier, PageFetchError, PageFetcher,
};
use linguara::application::services::{ChatService, WebpageService, WebpageServiceError};
use linguara::domain::Conversation;
use linguara::infrastructure::extraction::HtmlAdapter;

struct StubFetcher {
    calls: AtomicUsize,
    body: &'static str,
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &Url) -> Result<Vec<u8>, PageFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.as_bytes().to_vec())
    }
}

struct EchoModel;

#[async_trait]
impl ChatClient for EchoModel {
    fn model(&self) -> &str {
        "echo"
    }

    async fn complete(&self, conversation: &Conversation) -> Result<String, ChatClientError> {
        let prompt = conversation
            .transmittable()
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        Ok(format!("translated: {}", prompt))
    }
}

fn service(fetcher: Arc<StubFetcher>) -> WebpageService {
    let chat = Arc::new(ChatService::new(
        vec![Arc::new(EchoModel)],
        Arc::new(NullNotifier),
    ));
    WebpageService::new(
        fetcher,
        Arc::new(HtmlAdapter::new()),
        chat,
        Arc::new(NullNotifier),
    )
}

#[tokio::test]
async fn given_page_with_headings_when_translated_then_prompt_carries_marked_content() {
    let fetcher = Arc::new(StubFetcher {
        calls: AtomicUsize::new(0),
        body: "<html><body><h1>Title</h1><p>Body text.</p></body></html>",
    });
    let service = service(fetcher.clone());

    let result = service
        .translate_page("https://example.com/article", "fr".parse().unwrap())
        .await
        .unwrap();

    assert!(result.contains("## Title ##"));
    assert!(result.contains("Body text."));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_invalid_url_when_translating_then_rejected_without_fetch() {
    let fetcher = Arc::new(StubFetcher {
        calls: AtomicUsize::new(0),
        body: "<html></html>",
    });
    let service = service(fetcher.clone());

    let result = service
        .translate_page("not a url at all", "fr".parse().unwrap())
        .await;

    assert!(matches!(result, Err(WebpageServiceError::InvalidUrl(_))));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_empty_url_when_translating_then_rejected_without_fetch() {
    let fetcher = Arc::new(StubFetcher {
        calls: AtomicUsize::new(0),
        body: "<html></html>",
    });
    let service = service(fetcher.clone());

    let result = service.translate_page("   ", "fr".parse().unwrap()).await;

    assert!(matches!(result, Err(WebpageServiceError::EmptyUrl)));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_page_without_text_when_translating_then_extraction_error_surfaces() {
    let fetcher = Arc::new(StubFetcher {
        calls: AtomicUsize::new(0),
        body: "<html><body><script>nothing()</script></body></html>",
    });
    let service = service(fetcher);

    let result = service
        .translate_page("https://example.com/empty", "fr".parse().unwrap())
        .await;

    assert!(matches!(result, Err(WebpageServiceError::Extraction(_))));
}
