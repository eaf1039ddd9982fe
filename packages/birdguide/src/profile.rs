use serde::Serialize;

/// Structured description of one species, scraped from its guide page.
///
/// `url` is the page that was requested and is always set. Every other field
/// is filled by extraction; a profile with `found == false` has none of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeciesProfile {
    pub name: String,
    pub scientific_name: String,
    pub order: String,
    pub family: String,
    pub habitat: String,
    pub food: String,
    pub nesting: String,
    pub behavior: String,
    pub description: String,
    /// Fact strings in document order.
    pub facts: Vec<String>,
    pub url: String,
    pub image_url: Option<String>,
    pub found: bool,
}

impl SpeciesProfile {
    /// An in-progress profile for `url`. `found` stays false until extraction
    /// finishes without hitting the search-results marker.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// The terminal negative state: the guide has no page for this species.
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    pub fn is_found(&self) -> bool {
        self.found
    }

    /// True if no extracted field carries a value.
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.scientific_name,
            &self.order,
            &self.family,
            &self.habitat,
            &self.food,
            &self.nesting,
            &self.behavior,
            &self.description,
        ]
        .iter()
        .all(|s| s.is_empty())
            && self.facts.is_empty()
            && self.image_url.is_none()
    }
}
