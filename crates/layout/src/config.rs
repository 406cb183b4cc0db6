//! Configuration for the layout engine

use crate::columns::Breakpoints;
use serde::{Deserialize, Serialize};

/// A recency bucket: memories at most `max_days` away from now earn `bonus`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecencyTier {
    pub max_days: f64,
    pub bonus: i64,
}

/// Point table used to rank memories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Base score for trips
    pub trip_base: i64,

    /// Base score for events
    pub event_base: i64,

    /// Base score for simple (and unrecognized) memories
    pub simple_base: i64,

    /// Recency buckets, checked in order; the first match wins
    pub recency_tiers: Vec<RecencyTier>,

    /// The photo bonus only applies above this many photos
    pub photo_threshold: u32,

    /// Points per photo once above the threshold
    pub points_per_photo: i64,

    /// Cap on the photo bonus
    pub photo_bonus_max: i64,

    /// Bonus for a tagged location
    pub location_bonus: i64,

    /// Bonus for a trip with a tagged song
    pub trip_song_bonus: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            trip_base: 100,
            event_base: 50,
            simple_base: 25,
            recency_tiers: vec![
                RecencyTier { max_days: 7.0, bonus: 50 },
                RecencyTier { max_days: 30.0, bonus: 25 },
                RecencyTier { max_days: 90.0, bonus: 10 },
            ],
            photo_threshold: 1,
            points_per_photo: 2,
            photo_bonus_max: 20,
            location_bonus: 5,
            trip_song_bonus: 10,
        }
    }
}

/// Layout engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Viewport width to column count table
    pub breakpoints: Breakpoints,

    /// Scoring table for non-future memories
    pub weights: ScoreWeights,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the breakpoint table
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the scoring table
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }
}
