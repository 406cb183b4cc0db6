//! Priority score for memory cards
//!
//! Higher scores are laid out first. A score is the sum of
//! - a base by kind (trip > event > simple),
//! - a recency bonus from the distance between `now` and the effective date,
//! - a capped photo bonus for memories with more than one photo,
//! - small bonuses for a tagged location and, on trips, a tagged song.

use crate::config::ScoreWeights;
use chrono::{DateTime, Utc};
use duo_core::{MemoryKind, MemoryRecord};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Score a memory with the default weights
pub fn score(record: &MemoryRecord, now: DateTime<Utc>) -> i64 {
    ScoreWeights::default().score(record, now)
}

/// Absolute distance between `now` and the record's effective date, in days
fn days_from(record: &MemoryRecord, now: DateTime<Utc>) -> f64 {
    let delta_ms = (now - record.effective_date()).num_milliseconds();
    delta_ms.unsigned_abs() as f64 / MS_PER_DAY
}

impl ScoreWeights {
    /// Score a memory with this table
    pub fn score(&self, record: &MemoryRecord, now: DateTime<Utc>) -> i64 {
        self.base(record.kind)
            + self.recency_bonus(days_from(record, now))
            + self.photo_bonus(record.photo_count)
            + self.metadata_bonus(record)
    }

    fn base(&self, kind: MemoryKind) -> i64 {
        match kind {
            MemoryKind::Trip => self.trip_base,
            MemoryKind::Event => self.event_base,
            MemoryKind::Simple | MemoryKind::Future => self.simple_base,
        }
    }

    fn recency_bonus(&self, days: f64) -> i64 {
        self.recency_tiers
            .iter()
            .find(|tier| days <= tier.max_days)
            .map(|tier| tier.bonus)
            .unwrap_or(0)
    }

    fn photo_bonus(&self, photo_count: u32) -> i64 {
        if photo_count <= self.photo_threshold {
            return 0;
        }
        (i64::from(photo_count) * self.points_per_photo).min(self.photo_bonus_max)
    }

    fn metadata_bonus(&self, record: &MemoryRecord) -> i64 {
        let mut bonus = 0;
        if record.has_location() {
            bonus += self.location_bonus;
        }
        if record.kind == MemoryKind::Trip && record.has_song() {
            bonus += self.trip_song_bonus;
        }
        bonus
    }
}
