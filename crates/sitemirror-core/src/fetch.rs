//! One-shot page fetches over a shared HTTP client.

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Error for a single page fetch. Per-job and recoverable: the worker logs it
/// and the job yields no file and no children.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
}

/// A fetched page body plus the Content-Type the server reported.
#[derive(Debug)]
pub struct FetchedPage {
    pub body: Vec<u8>,
    pub content_type: String,
}

impl FetchedPage {
    /// True when the server declared HTML content.
    pub fn is_html(&self) -> bool {
        self.content_type.to_ascii_lowercase().contains("text/html")
    }
}

/// HTTP fetcher: fixed user agent, client-wide timeout, TLS verification
/// disabled so self-signed test sites can be mirrored. The relaxed TLS policy
/// is intentional; do not point this at hosts you need to authenticate.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { client })
    }

    /// Performs one GET. No retries: callers drop the job on failure.
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = resp.bytes().await?.to_vec();
        Ok(FetchedPage { body, content_type })
    }
}
