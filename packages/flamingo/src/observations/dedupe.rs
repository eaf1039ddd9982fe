//! Merging of notable sightings that share species, place and date.

use ebird_client::SightingRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// One (species, place, date) with the summed count of every record under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedSighting {
    pub species: String,
    pub place: String,
    /// Observation date with the time of day removed.
    pub date: String,
    pub count: i64,
}

/// Date part of an API timestamp: everything before the first whitespace.
///
/// `"2024-01-15 08:30"` becomes `"2024-01-15"`. Two observations on the same
/// day at the same place therefore merge even if their times differ.
pub fn observation_date(observed_at: &str) -> &str {
    observed_at.split_whitespace().next().unwrap_or("")
}

/// Merge records by exact (species, place, date) key.
///
/// Records with a non-positive count are dropped before merging. Output keeps
/// first-seen order; callers sort.
pub fn aggregate_notable(records: Vec<SightingRecord>) -> Vec<AggregatedSighting> {
    let mut merged: IndexMap<(String, String, String), i64> = IndexMap::new();

    for record in records.into_iter().filter(|r| r.count > 0) {
        let date = observation_date(&record.observed_at).to_string();
        *merged
            .entry((record.species, record.place, date))
            .or_insert(0) += record.count;
    }

    merged
        .into_iter()
        .map(|((species, place, date), count)| AggregatedSighting {
            species,
            place,
            date,
            count,
        })
        .collect()
}
