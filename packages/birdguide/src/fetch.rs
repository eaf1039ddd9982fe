//! Page fetching.
//!
//! The scraper only needs "URL in, HTML out", so fetching sits behind a trait
//! and tests can swap in [`crate::testing::MockFetcher`].

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{GuideError, Result};

const USER_AGENT: &str = "FlaminGo/0.1";

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return the response body.
    async fn fetch(&self, url: &str) -> Result<String>;

    /// Fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

/// The reqwest client used for guide pages: bounded timeout and redirects,
/// identifying user agent. Callers may share it with other API clients.
pub fn http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;
    Ok(client)
}

/// Fetches pages over HTTP with reqwest.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http_client()?,
        })
    }

    /// Fetch with an existing HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "HTTP fetch starting");
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            GuideError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuideError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        debug!(url = %url, content_length = html.len(), "Page fetched");
        Ok(html)
    }

    fn name(&self) -> &str {
        "http"
    }
}
