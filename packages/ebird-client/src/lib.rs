//! Pure eBird observation API client.
//!
//! A minimal client for the geo-scoped observation feeds of the eBird API.
//! One request per call, no retries; failures are handed back to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use ebird_client::{EbirdClient, Location, ObservationMode};
//!
//! let client = EbirdClient::new("your-api-key".into());
//! let rit = Location::new("L976278", 43.08, -77.67, "Rochester Institute of Technology");
//!
//! let sightings = client.observations(&rit, 5, ObservationMode::Recent).await?;
//! for s in &sightings {
//!     println!("{}: {}", s.species, s.count);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{EbirdError, Result};
pub use types::{Location, ObservationMode, SightingRecord};

pub const DEFAULT_BASE_URL: &str = "https://api.ebird.org/v2";

/// Header carrying the API credential.
pub const TOKEN_HEADER: &str = "X-eBirdApiToken";

#[derive(Debug, Clone)]
pub struct EbirdClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl EbirdClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (trailing slash ignored).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Build the feed URL and query parameters for a location/radius/mode.
    fn query_for(
        &self,
        location: &Location,
        radius_km: u32,
        mode: ObservationMode,
    ) -> (String, Vec<(&'static str, String)>) {
        let mut params = vec![
            ("lat", location.latitude.to_string()),
            ("lng", location.longitude.to_string()),
            ("sort", "species".to_string()),
            ("dist", radius_km.to_string()),
        ];

        let url = match mode {
            ObservationMode::Recent => format!("{}/data/obs/geo/recent", self.base_url),
            ObservationMode::Notable => {
                params.push(("hotspot", "true".to_string()));
                format!("{}/data/obs/geo/recent/notable", self.base_url)
            }
        };

        (url, params)
    }

    /// Fetch observations within `radius_km` of `location`.
    pub async fn observations(
        &self,
        location: &Location,
        radius_km: u32,
        mode: ObservationMode,
    ) -> Result<Vec<SightingRecord>> {
        let (url, params) = self.query_for(location, radius_km, mode);
        tracing::debug!(
            location = %location.name,
            radius_km,
            mode = mode.as_str(),
            "Requesting eBird observations"
        );

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EbirdError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let sightings: Vec<SightingRecord> = serde_json::from_str(&body)?;
        tracing::debug!(
            count = sightings.len(),
            mode = mode.as_str(),
            "Decoded eBird observations"
        );

        Ok(sightings)
    }

    /// Shorthand for [`ObservationMode::Recent`].
    pub async fn recent(&self, location: &Location, radius_km: u32) -> Result<Vec<SightingRecord>> {
        self.observations(location, radius_km, ObservationMode::Recent).await
    }

    /// Shorthand for [`ObservationMode::Notable`].
    pub async fn notable(
        &self,
        location: &Location,
        radius_km: u32,
    ) -> Result<Vec<SightingRecord>> {
        self.observations(location, radius_km, ObservationMode::Notable).await
    }
}
