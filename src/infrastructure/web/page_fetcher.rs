use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::application::ports::{PageFetchError, PageFetcher};

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
const USER_AGENT: &str = concat!("linguara/", env!("CARGO_PKG_VERSION"));

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self { client }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    #[tracing::instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, PageFetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| PageFetchError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PageFetchError::HttpStatus(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PageFetchError::RequestFailed(e.to_string()))?;

        Ok(body.to_vec())
    }
}
