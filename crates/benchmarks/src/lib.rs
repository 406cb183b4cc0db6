//! Benchmarks for Duo Grid
//!
//! Shared fixtures for the criterion benches: realistic memory collections
//! mixing every kind, spread over a few years, with photos and metadata.

/// Re-export crates under benchmark
pub use duo_core;
pub use duo_layout;
pub use duo_recap;

use chrono::{DateTime, Duration, Utc};
use duo_core::{MemoryKind, MemoryRecord};

/// Build `count` memories relative to `now`.
///
/// Deterministic: the same `(count, now)` always yields the same collection.
pub fn memory_collection(count: usize, now: DateTime<Utc>) -> Vec<MemoryRecord> {
    const KINDS: [MemoryKind; 4] = [
        MemoryKind::Simple,
        MemoryKind::Trip,
        MemoryKind::Simple,
        MemoryKind::Event,
    ];

    (0..count)
        .map(|i| {
            let days_ago = ((i * 37) % 1100) as i64;
            let kind = if i % 11 == 0 {
                MemoryKind::Future
            } else {
                KINDS[i % KINDS.len()]
            };

            let mut record = MemoryRecord::new(format!("m{i}"), kind, now - Duration::days(days_ago))
                .with_photo_count(((i * 7) % 25) as u32);

            if kind == MemoryKind::Future {
                if i % 2 == 0 {
                    record = record.with_start_date(now + Duration::days((i % 200) as i64));
                }
            } else if i % 3 == 0 {
                record = record.with_start_date(now - Duration::days(days_ago + 2));
            }
            if i % 4 == 0 {
                record = record.with_location(format!("place-{}", i % 17));
            }
            if i % 5 == 0 {
                record = record.with_song(format!("song-{i}"));
            }
            record
        })
        .collect()
}
