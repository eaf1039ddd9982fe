//! Typed errors for the guide scraper.

use thiserror::Error;

/// Errors that can occur while fetching or parsing a species page.
#[derive(Debug, Error)]
pub enum GuideError {
    /// HTTP request failed before a response was read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Page answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// URL could not be parsed or is outside the guide site
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// A built-in CSS selector failed to compile
    #[error("selector error: {0}")]
    Selector(String),
}

impl GuideError {
    /// True when the page could not be retrieved at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, GuideError::Http(_) | GuideError::Status { .. })
    }
}

/// Result type alias for guide operations.
pub type Result<T> = std::result::Result<T, GuideError>;
