//! Rendering of sighting lists into a single chat message.

use ebird_client::{ObservationMode, SightingRecord};

use super::dedupe::AggregatedSighting;

/// Hard ceiling of the downstream message transport, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

/// Cut point handed to [`truncate_text`]; leaves room for [`ELLIPSIS`].
pub const TRUNCATE_AT: usize = MESSAGE_LIMIT - 5;

/// Appended after the last whole line when a message is cut.
pub const ELLIPSIS: &str = "\n...";

/// Anything that can be listed as one line of a sightings message.
pub trait SightingLine {
    fn species(&self) -> &str;
    fn count(&self) -> i64;
    fn line(&self) -> String;
}

impl SightingLine for SightingRecord {
    fn species(&self) -> &str {
        &self.species
    }

    fn count(&self) -> i64 {
        self.count
    }

    fn line(&self) -> String {
        format!("{}: {}", self.species, self.count)
    }
}

impl SightingLine for AggregatedSighting {
    fn species(&self) -> &str {
        &self.species
    }

    fn count(&self) -> i64 {
        self.count
    }

    fn line(&self) -> String {
        format!("{}: {} [{}: {}]", self.species, self.count, self.place, self.date)
    }
}

pub fn header(mode: ObservationMode, radius_km: u32, location_name: &str) -> String {
    let kind = match mode {
        ObservationMode::Recent => "Verified",
        ObservationMode::Notable => "Notable",
    };
    format!(
        "**{kind} eBird sightings within {radius_km} km of {location_name} in the past 2 weeks:**"
    )
}

pub fn no_sightings(mode: ObservationMode) -> &'static str {
    match mode {
        ObservationMode::Recent => "**No recent eBird sightings found.**",
        ObservationMode::Notable => "**No notable eBird sightings found.**",
    }
}

/// Sort by species name, ascending or descending. Equal names keep their
/// relative order.
pub fn sort_by_species<T: SightingLine>(items: &mut [T], reverse: bool) {
    if reverse {
        items.sort_by(|a, b| b.species().cmp(a.species()));
    } else {
        items.sort_by(|a, b| a.species().cmp(b.species()));
    }
}

/// Build the message: header, then one line per positive-count entry in
/// species order, bounded by [`TRUNCATE_AT`]. With nothing to list the result
/// is `empty` alone.
pub fn format_sightings<T: SightingLine>(
    items: Vec<T>,
    reverse: bool,
    header: &str,
    empty: &str,
) -> String {
    let mut items: Vec<T> = items.into_iter().filter(|s| s.count() > 0).collect();
    if items.is_empty() {
        return empty.to_string();
    }
    sort_by_species(&mut items, reverse);

    let mut message = String::with_capacity(header.len() + items.len() * 32);
    message.push_str(header);
    message.push('\n');
    for item in &items {
        message.push_str(&item.line());
        message.push('\n');
    }

    truncate_text(&message, TRUNCATE_AT)
}

/// Cut `text` at the last newline before character `max` and append
/// [`ELLIPSIS`]. Text of at most `max` characters is returned unchanged.
///
/// The result never exceeds `max + 3` characters and never ends inside a
/// line. Text with no newline before `max` collapses to `"..."`.
pub fn truncate_text(text: &str, max: usize) -> String {
    let Some((limit, _)) = text.char_indices().nth(max) else {
        return text.to_string();
    };

    match text[..limit].rfind('\n') {
        Some(cut) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => ELLIPSIS.trim_start().to_string(),
    }
}
