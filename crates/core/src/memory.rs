//! Memory record structures

use crate::types::MemoryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of memory
///
/// Parsing is case-insensitive and total: any tag that is not one of the
/// known kinds becomes `Simple`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MemoryKind {
    Trip,
    Event,
    Simple,
    /// Planned memory, shown ahead of everything else in date order
    Future,
}

impl MemoryKind {
    /// Parse a source type tag, falling back to `Simple`
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "trip" => Self::Trip,
            "event" => Self::Event,
            "future" => Self::Future,
            _ => Self::Simple,
        }
    }

    /// Number of grid columns a card of this kind occupies
    pub fn width(&self) -> usize {
        match self {
            Self::Trip | Self::Event => 2,
            Self::Simple | Self::Future => 1,
        }
    }

    /// Whether this kind occupies more than one column
    pub fn is_wide(&self) -> bool {
        self.width() > 1
    }

    /// Visual span of the card in the rendered grid
    pub fn grid_span(&self) -> GridSpan {
        match self {
            Self::Trip => GridSpan { cols: 2, rows: 2 },
            Self::Event => GridSpan { cols: 2, rows: 1 },
            Self::Simple | Self::Future => GridSpan { cols: 1, rows: 1 },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trip => "trip",
            Self::Event => "event",
            Self::Simple => "simple",
            Self::Future => "future",
        }
    }
}

impl From<&str> for MemoryKind {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<String> for MemoryKind {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl std::fmt::Display for MemoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering span hint for a grid card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpan {
    pub cols: u8,
    pub rows: u8,
}

/// A memory as delivered by the memory data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub id: MemoryId,

    /// Kind of memory (`type` on the wire)
    #[serde(rename = "type")]
    pub kind: MemoryKind,

    /// When the memory took place; `created_at` stands in when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    /// Total photos attached
    #[serde(default)]
    pub photo_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MemoryRecord {
    /// Create a bare record with no photos and no optional metadata
    pub fn new(id: impl Into<String>, kind: MemoryKind, created_at: DateTime<Utc>) -> Self {
        Self {
            id: MemoryId::new(id),
            kind,
            start_date: None,
            end_date: None,
            created_at,
            photo_count: 0,
            location: None,
            song: None,
            title: None,
        }
    }

    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_photo_count(mut self, photo_count: u32) -> Self {
        self.photo_count = photo_count;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_song(mut self, song: impl Into<String>) -> Self {
        self.song = Some(song.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// `start_date` if present, otherwise `created_at`
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.start_date.unwrap_or(self.created_at)
    }

    /// Columns this record occupies in the grid
    pub fn width(&self) -> usize {
        self.kind.width()
    }

    pub fn is_future(&self) -> bool {
        self.kind == MemoryKind::Future
    }

    /// Location set and non-empty
    pub fn has_location(&self) -> bool {
        self.location.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Song set and non-empty
    pub fn has_song(&self) -> bool {
        self.song.as_deref().is_some_and(|s| !s.is_empty())
    }
}
