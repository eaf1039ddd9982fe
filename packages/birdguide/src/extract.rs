//! Sequential extractor: walks the element sequence once and fills a profile.
//!
//! Info-box spans come as unstructured `label, value, label, value` runs, so a
//! single pending-field cursor remembers the last label seen. The cursor is
//! consumed by the very next span, whatever it contains.

use tracing::debug;

use crate::elements::Element;
use crate::profile::SpeciesProfile;

const DESCRIPTION_HEADING: &str = "Basic Description";

/// Info-box fields that are filled from a label span followed by a value span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Habitat,
    Food,
    Nesting,
    Behavior,
}

impl Field {
    fn from_label(text: &str) -> Option<Self> {
        match text {
            "Habitat" => Some(Field::Habitat),
            "Food" => Some(Field::Food),
            "Nesting" => Some(Field::Nesting),
            "Behavior" => Some(Field::Behavior),
            _ => None,
        }
    }

    fn slot<'a>(&self, profile: &'a mut SpeciesProfile) -> &'a mut String {
        match self {
            Field::Habitat => &mut profile.habitat,
            Field::Food => &mut profile.food,
            Field::Nesting => &mut profile.nesting,
            Field::Behavior => &mut profile.behavior,
        }
    }
}

/// Run the extractor over `elements` for the page at `url`.
///
/// Hitting the search-results title ends the walk with a not-found profile;
/// nothing gathered before it survives. Missing labels just leave fields empty.
pub fn extract(url: &str, elements: &[Element]) -> SpeciesProfile {
    let mut profile = SpeciesProfile::new(url);
    let mut pending: Option<Field> = None;

    for element in elements {
        match element {
            Element::PageTitle => {
                debug!(url = %url, "Search results page, species not found");
                return SpeciesProfile::not_found(url);
            }
            Element::SpeciesName(text) => {
                if profile.name.is_empty() {
                    profile.name = text.clone();
                }
            }
            Element::ScientificName(text) => {
                if profile.scientific_name.is_empty() {
                    profile.scientific_name = text.clone();
                }
            }
            Element::InfoItem(text) => {
                let mut tokens = text.split_whitespace();
                match (tokens.next(), tokens.next()) {
                    (Some("ORDER:"), Some(value)) => profile.order = value.to_string(),
                    (Some("FAMILY:"), Some(value)) => profile.family = value.to_string(),
                    _ => {}
                }
            }
            Element::InfoSpan(text) => {
                if let Some(field) = pending.take() {
                    *field.slot(&mut profile) = text.clone();
                }
                if let Some(field) = Field::from_label(text) {
                    pending = Some(field);
                }
            }
            Element::DescriptionBlock { heading, paragraph } => {
                if heading == DESCRIPTION_HEADING {
                    profile.description = paragraph.clone();
                }
            }
            Element::Fact(text) => profile.facts.push(text.clone()),
            Element::HeroImage { interchange } => {
                if profile.image_url.is_none() {
                    profile.image_url = interchange.as_deref().and_then(image_from_interchange);
                }
            }
        }
    }

    profile.found = true;
    profile
}

/// Pull the image URL out of a responsive-image `data-interchange` value.
///
/// The attribute looks like `[url1, small], [url2, medium], [url3, large]`.
/// Splitting on `[` gives a leading empty piece, so the fourth piece is the
/// third entry; its URL is everything before the first comma.
pub fn image_from_interchange(interchange: &str) -> Option<String> {
    let entry = interchange.split('[').nth(3)?;
    let url = entry.split(',').next()?.trim();
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}
