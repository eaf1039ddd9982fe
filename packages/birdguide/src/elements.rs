//! Flattens a guide page into the ordered element sequence the extractor walks.
//!
//! Only elements inside the regions the extractor cares about are emitted, each
//! tagged with what it is. A single node can yield more than one element (a
//! `span.species-name` inside the info box is both a name and an info span).

use scraper::{ElementRef, Html, Selector};

use crate::error::{GuideError, Result};

/// A typed piece of a species page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// The generic search-results page title (`h1.page-title`).
    PageTitle,
    /// `.species-name` inside the species info box.
    SpeciesName(String),
    /// `<em>` inside the species info box.
    ScientificName(String),
    /// `<li>` inside the species info box (`ORDER: ...`, `FAMILY: ...`).
    InfoItem(String),
    /// `<span>` inside the species info box; labels and values alternate.
    InfoSpan(String),
    /// A `<div>` in the description card with its `h2` and `p` text.
    DescriptionBlock { heading: String, paragraph: String },
    /// A list item nested in the active tab.
    Fact(String),
    /// An image in the hero menu with its `data-interchange` attribute.
    HeroImage { interchange: Option<String> },
}

struct Selectors {
    page_title: Selector,
    species_info: Selector,
    species_name: Selector,
    description_card: Selector,
    active_tab: Selector,
    hero_menu: Selector,
    heading: Selector,
    paragraph: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            page_title: parse("h1[class='page-title']")?,
            species_info: parse(".callout[aria-label='Species Info']")?,
            species_name: parse(".species-name")?,
            description_card: parse(".speciesInfoCard")?,
            active_tab: parse("li[class='is-active']")?,
            hero_menu: parse(".hero-menu")?,
            heading: parse("h2")?,
            paragraph: parse("p")?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| GuideError::Selector(format!("{selector}: {e:?}")))
}

fn within(element: &ElementRef<'_>, selector: &Selector) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| selector.matches(&ancestor))
}

fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Concatenated text of every descendant matching `selector`.
fn child_text(element: &ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|child| child.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Walk `html` in document order and emit the elements the extractor reads.
pub fn tokenize(html: &str) -> Result<Vec<Element>> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);
    let mut elements = Vec::new();

    for node in document.root_element().descendants() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        let tag = el.value().name();

        if selectors.page_title.matches(&el) {
            elements.push(Element::PageTitle);
        }

        if within(&el, &selectors.species_info) {
            if selectors.species_name.matches(&el) {
                elements.push(Element::SpeciesName(text_of(&el)));
            }
            match tag {
                "em" => elements.push(Element::ScientificName(text_of(&el))),
                "li" => elements.push(Element::InfoItem(text_of(&el))),
                "span" => elements.push(Element::InfoSpan(text_of(&el))),
                _ => {}
            }
        }

        match tag {
            "div" if within(&el, &selectors.description_card) => {
                elements.push(Element::DescriptionBlock {
                    heading: child_text(&el, &selectors.heading),
                    paragraph: child_text(&el, &selectors.paragraph),
                });
            }
            "li" if within(&el, &selectors.active_tab) => {
                elements.push(Element::Fact(text_of(&el)));
            }
            "img" if within(&el, &selectors.hero_menu) => {
                elements.push(Element::HeroImage {
                    interchange: el.value().attr("data-interchange").map(str::to_string),
                });
            }
            _ => {}
        }
    }

    Ok(elements)
}
