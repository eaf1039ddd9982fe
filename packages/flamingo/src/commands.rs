//! Command facade consumed by a chat dispatcher (or the CLI).
//!
//! Each call is one self-contained pipeline run; the only shared state is the
//! read-only [`Config`] and the HTTP clients.

use birdguide::{http_client, HttpFetcher, ProfileScraper, SpeciesProfile};
use ebird_client::{EbirdClient, Location};
use std::future::Future;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{FlamingoError, Result};
use crate::observations::{notable_message, recent_message};
use crate::render::{help_embed, not_found_embed, render_profile, Embed};

#[derive(Clone)]
pub struct Flamingo {
    config: Arc<Config>,
    ebird: EbirdClient,
    guide: ProfileScraper,
}

impl Flamingo {
    /// Build the facade with real HTTP clients pointed at the configured roots.
    /// Both remote services share one connection pool.
    pub fn new(config: Config) -> Result<Self> {
        let http = http_client().map_err(FlamingoError::setup)?;

        let ebird = EbirdClient::new(config.ebird_key.clone())
            .with_base_url(&config.ebird_base_url)
            .with_client(http.clone());
        let guide = ProfileScraper::with_fetcher(Arc::new(HttpFetcher::with_client(http)))
            .with_base_url(&config.guide_base_url);

        Ok(Self::with_clients(config, ebird, guide))
    }

    pub fn with_clients(config: Config, ebird: EbirdClient, guide: ProfileScraper) -> Self {
        Self {
            config: Arc::new(config),
            ebird,
            guide,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn location(&self, key: &str) -> Result<&Location> {
        self.config
            .location(key)
            .ok_or_else(|| FlamingoError::UnknownLocation(key.to_string()))
    }

    /// Run `fut` under the configured request timeout.
    async fn timed<T, E>(&self, fut: impl Future<Output = std::result::Result<T, E>>) -> Result<T>
    where
        FlamingoError: From<E>,
    {
        Ok(tokio::time::timeout(self.config.request_timeout, fut).await??)
    }

    /// Recent sightings around a named location, as a bounded message.
    pub async fn recent(&self, location_key: &str, reversed: bool) -> Result<String> {
        let location = self.location(location_key)?;
        let radius_km = self.config.radius_km;

        let records = self.timed(self.ebird.recent(location, radius_km)).await?;
        info!(
            location = %location.name,
            radius_km,
            count = records.len(),
            "Recent sightings fetched"
        );

        Ok(recent_message(records, radius_km, &location.name, reversed))
    }

    /// Notable sightings around a named location, merged per species/place/day.
    pub async fn notable(&self, location_key: &str, reversed: bool) -> Result<String> {
        let location = self.location(location_key)?;
        let radius_km = self.config.notable_radius_km();

        let records = self.timed(self.ebird.notable(location, radius_km)).await?;
        info!(
            location = %location.name,
            radius_km,
            count = records.len(),
            "Notable sightings fetched"
        );

        Ok(notable_message(records, radius_km, &location.name, reversed))
    }

    /// Scrape the profile for a species name.
    ///
    /// Returns [`FlamingoError::NotFound`] when the guide has no such page.
    pub async fn profile(&self, species_name: &str) -> Result<SpeciesProfile> {
        let profile = self.timed(self.guide.lookup(species_name)).await?;
        if !profile.found {
            return Err(FlamingoError::NotFound { url: profile.url });
        }
        Ok(profile)
    }

    /// Profile embed for a species name. Any failure renders as not-found.
    pub async fn bird(&self, species_name: &str) -> Embed {
        match self.profile(species_name).await {
            Ok(profile) => render_profile(&profile, &mut rand::rng()),
            Err(FlamingoError::NotFound { url }) => {
                info!(url = %url, "Species not found");
                not_found_embed()
            }
            Err(e) => {
                warn!(species = species_name, error = %e, "Species lookup failed");
                not_found_embed()
            }
        }
    }

    pub fn help(&self) -> Embed {
        let locations: Vec<&str> = self
            .config
            .locations
            .keys()
            .map(String::as_str)
            .collect();
        help_embed(
            self.config.radius_km,
            self.config.notable_radius_km(),
            &locations,
        )
    }

    /// Reply text for an observation command: the message, or the error text.
    pub fn reply(result: Result<String>) -> String {
        result.unwrap_or_else(|e| {
            warn!(error = %e, "Observation command failed");
            e.user_message()
        })
    }
}
