//! Recap statistics for a memory collection
//!
//! Totals, per-kind counts, favourite places and the next planned memory,
//! computed in one pass over the records. Like the layout engine this is a
//! pure function of its input and a caller-supplied `now`.

use chrono::{DateTime, Datelike, Utc};
use duo_core::{MemoryId, MemoryKind, MemoryRecord};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Number of locations reported when the caller does not ask for more
pub const TOP_LOCATIONS_COUNT_DEFAULT: usize = 5;

/// Memory counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub trip: u64,
    pub event: u64,
    pub simple: u64,
    pub future: u64,
}

impl KindCounts {
    fn record(&mut self, kind: MemoryKind) {
        match kind {
            MemoryKind::Trip => self.trip += 1,
            MemoryKind::Event => self.event += 1,
            MemoryKind::Simple => self.simple += 1,
            MemoryKind::Future => self.future += 1,
        }
    }
}

/// How many memories were tagged with a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: u64,
}

/// Aggregate statistics over a couple's memories
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recap {
    pub total_memories: u64,
    pub by_kind: KindCounts,
    pub total_photos: u64,

    /// Distinct non-empty locations (trimmed, case-sensitive)
    pub distinct_locations: usize,

    /// Most tagged locations, count descending then name ascending
    pub top_locations: Vec<LocationCount>,

    /// Memories with a non-empty song
    pub songs_tagged: u64,

    /// Planned memories dated now or later
    pub upcoming_futures: u64,

    /// The earliest upcoming planned memory
    pub next_future: Option<MemoryId>,

    /// Earliest effective date among past memories (plans excluded)
    pub first_memory: Option<DateTime<Utc>>,

    /// Latest effective date among past memories (plans excluded)
    pub latest_memory: Option<DateTime<Utc>>,

    /// Past memories per calendar year of their effective date
    pub memories_per_year: BTreeMap<i32, u64>,

    /// Longest trip with both dates set, counting start and end days
    pub longest_trip_days: Option<i64>,
}

impl Recap {
    /// Compute the recap, reporting at most `top_locations` places
    ///
    /// Locations are trimmed before counting, so a whitespace-only location
    /// is not a place here even though it still earns the layout score's
    /// location bonus.
    pub fn compute(records: &[MemoryRecord], now: DateTime<Utc>, top_locations: usize) -> Self {
        let mut recap = Recap {
            total_memories: records.len() as u64,
            ..Recap::default()
        };
        let mut locations: HashMap<&str, u64> = HashMap::new();
        let mut next_future: Option<(DateTime<Utc>, &MemoryId)> = None;

        for record in records {
            recap.by_kind.record(record.kind);
            recap.total_photos += u64::from(record.photo_count);

            if let Some(location) = record.location.as_deref().map(str::trim) {
                if !location.is_empty() {
                    *locations.entry(location).or_default() += 1;
                }
            }

            if record.has_song() {
                recap.songs_tagged += 1;
            }

            let date = record.effective_date();
            if record.is_future() {
                if date >= now {
                    recap.upcoming_futures += 1;
                    if next_future.map_or(true, |(best, _)| date < best) {
                        next_future = Some((date, &record.id));
                    }
                }
                continue;
            }

            recap.first_memory = Some(recap.first_memory.map_or(date, |d| d.min(date)));
            recap.latest_memory = Some(recap.latest_memory.map_or(date, |d| d.max(date)));
            *recap.memories_per_year.entry(date.year()).or_default() += 1;

            if let Some(days) = trip_days(record) {
                recap.longest_trip_days = Some(recap.longest_trip_days.map_or(days, |d| d.max(days)));
            }
        }

        recap.distinct_locations = locations.len();
        recap.top_locations = rank_locations(locations, top_locations);
        recap.next_future = next_future.map(|(_, id)| id.clone());

        tracing::debug!(
            total = recap.total_memories,
            photos = recap.total_photos,
            locations = recap.distinct_locations,
            upcoming = recap.upcoming_futures,
            "Computed recap"
        );

        recap
    }
}

/// Inclusive day count of a dated trip; `None` for other kinds or bad ranges
fn trip_days(record: &MemoryRecord) -> Option<i64> {
    if record.kind != MemoryKind::Trip {
        return None;
    }
    let (start, end) = (record.start_date?, record.end_date?);
    let days = (end.date_naive() - start.date_naive()).num_days();
    (days >= 0).then_some(days + 1)
}

fn rank_locations(locations: HashMap<&str, u64>, limit: usize) -> Vec<LocationCount> {
    let mut ranked: Vec<(&str, u64)> = locations.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(limit)
        .map(|(location, count)| LocationCount {
            location: location.to_string(),
            count,
        })
        .collect()
}
