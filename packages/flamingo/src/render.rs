//! Display structures (chat embeds) for species profiles and help.

use birdguide::SpeciesProfile;
use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::error::{FlamingoError, Result};

/// Pink.
pub const EMBED_COLOR: u32 = 16711833;

pub const NOT_FOUND_TITLE: &str = "Bird not found!";
pub const NOT_FOUND_DESCRIPTION: &str = "Make sure you spelled it right and have the name properly punctuated. Also make sure you have the full name (e.g. \"American Robin\" instead of just \"Robin\"). Birds outside of North America are unavailable.";

/// Shown in place of a fact when the page had none.
pub const NO_FACT: &str = "No fact available.";

/// Shown for fields the page did not provide.
pub const MISSING_VALUE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// A rich message: title, optional link/description/image, titled fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            url: None,
            color: EMBED_COLOR,
            fields: Vec::new(),
            image: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
        }
        for field in &self.fields {
            writeln!(f, "\n{}\n  {}", field.name, field.value)?;
        }
        if let Some(image) = &self.image {
            writeln!(f, "\nImage: {image}")?;
        }
        if let Some(url) = &self.url {
            writeln!(f, "Source: {url}")?;
        }
        Ok(())
    }
}

/// Uniformly pick one fact.
pub fn pick_fact<'a, R: Rng>(facts: &'a [String], rng: &mut R) -> Result<&'a str> {
    if facts.is_empty() {
        return Err(FlamingoError::EmptyFacts);
    }
    Ok(&facts[rng.random_range(0..facts.len())])
}

pub fn not_found_embed() -> Embed {
    Embed {
        description: Some(NOT_FOUND_DESCRIPTION.to_string()),
        ..Embed::new(NOT_FOUND_TITLE)
    }
}

fn or_missing(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING_VALUE
    } else {
        value
    }
}

/// Render a scraped profile. A not-found profile gets the fixed guidance embed.
pub fn render_profile<R: Rng>(profile: &SpeciesProfile, rng: &mut R) -> Embed {
    if !profile.found {
        return not_found_embed();
    }

    let fact = match pick_fact(&profile.facts, rng) {
        Ok(fact) => fact,
        Err(e) => {
            tracing::debug!(url = %profile.url, error = %e, "Profile has no facts");
            NO_FACT
        }
    };

    let fields = [
        ("Order", profile.order.as_str()),
        ("Family", profile.family.as_str()),
        ("Habitat", profile.habitat.as_str()),
        ("Food", profile.food.as_str()),
        ("Nesting", profile.nesting.as_str()),
        ("Behavior", profile.behavior.as_str()),
        ("Description", profile.description.as_str()),
        ("Cool Fact", fact),
    ]
    .into_iter()
    .map(|(name, value)| EmbedField::new(name, or_missing(value)))
    .collect();

    Embed {
        description: Some(profile.scientific_name.clone()),
        url: Some(profile.url.clone()),
        fields,
        image: profile.image_url.clone(),
        ..Embed::new(profile.name.clone())
    }
}

/// Command reference for the help command. Location keys are matched
/// case-insensitively.
pub fn help_embed(radius_km: u32, notable_radius_km: u32, locations: &[&str]) -> Embed {
    let places = locations.join("|");
    Embed {
        fields: vec![
            EmbedField::new("help", "Displays this list of commands"),
            EmbedField::new(
                format!("recent <{places}> [--reversed]"),
                format!(
                    "Returns a list of birds seen within {radius_km}km of the specified location \
                     in the past 2 weeks. Optionally, pass --reversed to reverse the alphabetical \
                     order."
                ),
            ),
            EmbedField::new(
                format!("notable <{places}> [--reversed]"),
                format!(
                    "Returns a list of notable bird sightings (rare, out of season, etc.) within \
                     {notable_radius_km}km of the specified location. Optionally, pass --reversed \
                     to reverse the alphabetical order."
                ),
            ),
            EmbedField::new(
                "bird <full bird name>",
                "Displays info for the specified bird. Uses information and names from \
                 AllAboutBirds.org.",
            ),
        ],
        ..Embed::new("FlaminGo Command Help")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn robin() -> SpeciesProfile {
        SpeciesProfile {
            name: "American Robin".into(),
            scientific_name: "Turdus migratorius".into(),
            order: "Passeriformes".into(),
            family: "Turdidae".into(),
            habitat: "Towns".into(),
            food: "Insects".into(),
            nesting: "Cup".into(),
            behavior: "Ground Forager".into(),
            description: "The quintessential early bird.".into(),
            facts: vec!["Fact one.".into(), "Fact two.".into()],
            url: "https://www.allaboutbirds.org/guide/American_Robin".into(),
            image_url: Some("https://cdn.example.com/robin.jpg".into()),
            found: true,
        }
    }

    #[test]
    fn test_found_profile_embed() {
        let mut rng = StdRng::seed_from_u64(7);
        let embed = render_profile(&robin(), &mut rng);

        assert_eq!(embed.title, "American Robin");
        assert_eq!(embed.description.as_deref(), Some("Turdus migratorius"));
        assert_eq!(
            embed.url.as_deref(),
            Some("https://www.allaboutbirds.org/guide/American_Robin")
        );
        assert_eq!(embed.image.as_deref(), Some("https://cdn.example.com/robin.jpg"));
        assert_eq!(embed.color, EMBED_COLOR);

        let names: Vec<_> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Order",
                "Family",
                "Habitat",
                "Food",
                "Nesting",
                "Behavior",
                "Description",
                "Cool Fact",
            ]
        );
        assert_eq!(embed.field("Family"), Some("Turdidae"));

        let fact = embed.field("Cool Fact").unwrap();
        assert!(fact == "Fact one." || fact == "Fact two.");
    }

    #[test]
    fn test_every_fact_can_be_picked() {
        let facts: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_fact(&facts, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_facts_is_guarded() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(pick_fact(&[], &mut rng), Err(FlamingoError::EmptyFacts)));

        let mut profile = robin();
        profile.facts.clear();
        let embed = render_profile(&profile, &mut rng);
        assert_eq!(embed.field("Cool Fact"), Some(NO_FACT));
    }

    #[test]
    fn test_missing_fields_show_placeholder() {
        let mut profile = robin();
        profile.nesting.clear();
        let embed = render_profile(&profile, &mut StdRng::seed_from_u64(1));
        assert_eq!(embed.field("Nesting"), Some(MISSING_VALUE));
    }

    #[test]
    fn test_not_found_profile_embed() {
        let profile = SpeciesProfile::not_found("https://www.allaboutbirds.org/guide/Dodo");
        let embed = render_profile(&profile, &mut StdRng::seed_from_u64(1));

        assert_eq!(embed, not_found_embed());
        assert_eq!(embed.title, NOT_FOUND_TITLE);
        assert!(embed.fields.is_empty());
        assert!(embed.description.unwrap().contains("full name"));
    }

    #[test]
    fn test_help_embed() {
        let embed = help_embed(5, 15, &["RIT", "Mendon", "Braddock"]);
        assert_eq!(embed.title, "FlaminGo Command Help");
        assert_eq!(embed.fields.len(), 4);
        assert_eq!(embed.fields[1].name, "recent <RIT|Mendon|Braddock> [--reversed]");
        assert_eq!(embed.fields[2].name, "notable <RIT|Mendon|Braddock> [--reversed]");
        assert!(embed.fields[2].value.contains("within 15km"));
    }
}
