//! Mock implementations for testing without network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{GuideError, Result};
use crate::fetch::PageFetcher;

/// Fetcher that serves canned HTML by URL and records every request.
///
/// Unknown URLs answer with HTTP 404, the same way a failed fetch would.
///
/// # Example
///
/// ```rust
/// use birdguide::testing::MockFetcher;
///
/// let fetcher = MockFetcher::new()
///     .with_page("https://example.com/guide/Blue_Jay", "<html></html>");
/// assert_eq!(fetcher.call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn add_page(&self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.write().unwrap().insert(url.into(), html.into());
    }

    /// Builder form of [`MockFetcher::add_page`].
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.write().unwrap().push(url.to_string());

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| GuideError::Status {
                status: 404,
                url: url.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
