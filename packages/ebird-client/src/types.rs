use serde::{Deserialize, Serialize};

/// A named place the observation API can be queried around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// eBird location code (e.g. `L976278`).
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable name used in message headers.
    pub name: String,
}

impl Location {
    pub fn new(
        code: impl Into<String>,
        latitude: f64,
        longitude: f64,
        name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            latitude,
            longitude,
            name: name.into(),
        }
    }
}

/// Which observation feed to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationMode {
    /// All recent observations.
    Recent,
    /// Rare or out-of-season observations, restricted to hotspots.
    Notable,
}

impl ObservationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationMode::Recent => "recent",
            ObservationMode::Notable => "notable",
        }
    }
}

/// A single observation entry from the API.
///
/// `HowMany` is omitted by the API when an observer only recorded presence,
/// so it defaults to zero and gets filtered out downstream. Field names are
/// also accepted in their capitalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingRecord {
    #[serde(rename = "comName", alias = "ComName")]
    pub species: String,
    #[serde(rename = "howMany", alias = "HowMany", default)]
    pub count: i64,
    #[serde(rename = "locName", alias = "LocName", default)]
    pub place: String,
    #[serde(rename = "obsDt", alias = "ObsDt", default)]
    pub observed_at: String,
}

impl SightingRecord {
    pub fn new(species: impl Into<String>, count: i64) -> Self {
        Self {
            species: species.into(),
            count,
            place: String::new(),
            observed_at: String::new(),
        }
    }

    /// Set the place and observation timestamp (notable feed fields).
    pub fn at(mut self, place: impl Into<String>, observed_at: impl Into<String>) -> Self {
        self.place = place.into();
        self.observed_at = observed_at.into();
        self
    }
}
