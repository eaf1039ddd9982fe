use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use crate::elements::tokenize;
use crate::error::{GuideError, Result};
use crate::extract::extract;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::profile::SpeciesProfile;
use crate::slug::species_slug;

pub const DEFAULT_BASE_URL: &str = "https://www.allaboutbirds.org/guide";

/// Fetches species pages and runs the extractor over them.
#[derive(Clone)]
pub struct ProfileScraper {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
}

impl ProfileScraper {
    /// Scraper backed by a real HTTP fetcher.
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(Arc::new(HttpFetcher::new()?)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the scraper at a different guide root (trailing slash ignored).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Canonical page URL for a free-text species name.
    pub fn url_for(&self, species_name: &str) -> String {
        format!("{}/{}", self.base_url, species_slug(species_name))
    }

    /// Look up a species by name.
    pub async fn lookup(&self, species_name: &str) -> Result<SpeciesProfile> {
        let url = self.url_for(species_name);
        self.scrape(&url).await
    }

    /// Fetch `url` and extract a profile from it.
    ///
    /// A fetch failure is returned as an error with no partial profile. A page
    /// that turns out to be the site's search results comes back as
    /// `Ok` with `found == false`.
    pub async fn scrape(&self, url: &str) -> Result<SpeciesProfile> {
        self.check_url(url)?;

        debug!(url = %url, fetcher = self.fetcher.name(), "Scraping species page");
        let html = self.fetcher.fetch(url).await?;
        let elements = tokenize(&html)?;
        let profile = extract(url, &elements);

        info!(
            url = %url,
            found = profile.found,
            facts = profile.facts.len(),
            "Species page scraped"
        );
        Ok(profile)
    }

    /// Only pages under the configured guide host are scraped.
    fn check_url(&self, url: &str) -> Result<()> {
        let invalid = || GuideError::InvalidUrl {
            url: url.to_string(),
        };
        let target = Url::parse(url).map_err(|_| invalid())?;
        let base = Url::parse(&self.base_url).map_err(|_| invalid())?;

        if target.host_str() != base.host_str() || target.port() != base.port() {
            return Err(invalid());
        }
        Ok(())
    }
}
