use anyhow::{Context, Result};
use dotenvy::dotenv;
use ebird_client::Location;
use indexmap::IndexMap;
use std::env;
use std::time::Duration;

pub const DEFAULT_RADIUS_KM: u32 = 5;
pub const DEFAULT_NOTABLE_MULTIPLIER: u32 = 3;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Application configuration. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Config {
    /// eBird API credential
    pub ebird_key: String,
    /// Search radius for recent sightings
    pub radius_km: u32,
    /// Notable sightings are sparse, so they search `radius_km * notable_multiplier`
    pub notable_multiplier: u32,
    /// Upper bound on each outbound request
    pub request_timeout: Duration,
    pub ebird_base_url: String,
    pub guide_base_url: String,
    /// Named locations keyed by lowercase selector
    pub locations: IndexMap<String, Location>,
}

impl Config {
    /// Fixture-friendly config with the built-in locations and defaults.
    pub fn new(ebird_key: impl Into<String>) -> Self {
        Self {
            ebird_key: ebird_key.into(),
            radius_km: DEFAULT_RADIUS_KM,
            notable_multiplier: DEFAULT_NOTABLE_MULTIPLIER,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            ebird_base_url: ebird_client::DEFAULT_BASE_URL.to_string(),
            guide_base_url: birdguide::DEFAULT_BASE_URL.to_string(),
            locations: default_locations(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let mut config = Self::new(env::var("EBIRD_KEY").context("EBIRD_KEY must be set")?);

        if let Ok(radius) = env::var("FLAMINGO_RADIUS_KM") {
            config.radius_km = radius
                .parse()
                .context("FLAMINGO_RADIUS_KM must be a whole number of kilometers")?;
        }
        if let Ok(multiplier) = env::var("FLAMINGO_NOTABLE_MULTIPLIER") {
            config.notable_multiplier = multiplier
                .parse()
                .context("FLAMINGO_NOTABLE_MULTIPLIER must be a whole number")?;
        }
        if let Ok(secs) = env::var("FLAMINGO_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .context("FLAMINGO_REQUEST_TIMEOUT_SECS must be a number of seconds")?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Ok(url) = env::var("EBIRD_BASE_URL") {
            config.ebird_base_url = url;
        }
        if let Ok(url) = env::var("BIRDGUIDE_BASE_URL") {
            config.guide_base_url = url;
        }

        Ok(config)
    }

    pub fn with_radius_km(mut self, radius_km: u32) -> Self {
        self.radius_km = radius_km;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_ebird_base_url(mut self, url: impl Into<String>) -> Self {
        self.ebird_base_url = url.into();
        self
    }

    pub fn with_guide_base_url(mut self, url: impl Into<String>) -> Self {
        self.guide_base_url = url.into();
        self
    }

    /// Add or replace a named location.
    pub fn with_location(mut self, key: impl Into<String>, location: Location) -> Self {
        self.locations.insert(key.into().to_lowercase(), location);
        self
    }

    /// Look up a location by selector, ignoring case.
    pub fn location(&self, key: &str) -> Option<&Location> {
        self.locations.get(&key.trim().to_lowercase())
    }

    pub fn notable_radius_km(&self) -> u32 {
        self.radius_km.saturating_mul(self.notable_multiplier)
    }
}

fn default_locations() -> IndexMap<String, Location> {
    IndexMap::from([
        (
            "rit".to_string(),
            Location::new("L976278", 43.08, -77.67, "Rochester Institute of Technology"),
        ),
        (
            "braddock".to_string(),
            Location::new("L772198", 43.30, -77.71, "Braddock Bay Park"),
        ),
        (
            "mendon".to_string(),
            Location::new("L139800", 43.02, -77.57, "Mendon Ponds Park"),
        ),
    ])
}
