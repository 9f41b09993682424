use async_trait::async_trait;
use url::Url;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, PageFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PageFetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("server returned {0}")]
    HttpStatus(u16),
}
