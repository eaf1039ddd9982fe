//! Sightings pipeline: fetched records -> (notable: merged) -> sorted,
//! filtered, bounded message.

pub mod dedupe;
pub mod format;

pub use dedupe::{aggregate_notable, observation_date, AggregatedSighting};
pub use format::{
    format_sightings, header, no_sightings, truncate_text, SightingLine, ELLIPSIS, MESSAGE_LIMIT,
    TRUNCATE_AT,
};

use ebird_client::{ObservationMode, SightingRecord};

/// Recent message for `records` fetched around `location_name`.
pub fn recent_message(
    records: Vec<SightingRecord>,
    radius_km: u32,
    location_name: &str,
    reverse: bool,
) -> String {
    format_sightings(
        records,
        reverse,
        &header(ObservationMode::Recent, radius_km, location_name),
        no_sightings(ObservationMode::Recent),
    )
}

/// Notable message: records are merged per (species, place, date) first.
pub fn notable_message(
    records: Vec<SightingRecord>,
    radius_km: u32,
    location_name: &str,
    reverse: bool,
) -> String {
    format_sightings(
        aggregate_notable(records),
        reverse,
        &header(ObservationMode::Notable, radius_km, location_name),
        no_sightings(ObservationMode::Notable),
    )
}
