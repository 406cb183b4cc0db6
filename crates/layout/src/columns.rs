//! Viewport width to column count breakpoints

use serde::{Deserialize, Serialize};

/// Default responsive breakpoints as `(min_width_px, columns)`, widest first
pub const DEFAULT_BREAKPOINTS: [(i64, usize); 4] = [(1536, 6), (1280, 5), (1024, 4), (640, 2)];

/// Columns used below the narrowest breakpoint
pub const DEFAULT_FALLBACK_COLUMNS: usize = 1;

/// A single breakpoint: viewports at least `min_width` pixels wide get `columns`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: i64,
    pub columns: usize,
}

/// Breakpoint table, evaluated widest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBreakpoints")]
pub struct Breakpoints {
    tiers: Vec<Breakpoint>,
    fallback_columns: usize,
}

/// Wire form of [`Breakpoints`]; normalised through [`Breakpoints::new`]
#[derive(Deserialize)]
struct RawBreakpoints {
    tiers: Vec<Breakpoint>,
    fallback_columns: usize,
}

impl From<RawBreakpoints> for Breakpoints {
    fn from(raw: RawBreakpoints) -> Self {
        Breakpoints::new(raw.tiers, raw.fallback_columns)
    }
}

impl Breakpoints {
    /// Build a table from arbitrary tiers.
    ///
    /// Tiers are re-sorted widest first and every column count is raised to
    /// at least 1, so lookup can never yield an empty grid.
    pub fn new(tiers: impl IntoIterator<Item = Breakpoint>, fallback_columns: usize) -> Self {
        let mut tiers: Vec<Breakpoint> = tiers
            .into_iter()
            .map(|t| Breakpoint {
                min_width: t.min_width,
                columns: t.columns.max(1),
            })
            .collect();
        tiers.sort_by(|a, b| b.min_width.cmp(&a.min_width));

        Self {
            tiers,
            fallback_columns: fallback_columns.max(1),
        }
    }

    /// Column count for a viewport width; first matching tier wins
    pub fn columns_for(&self, viewport_width: i64) -> usize {
        self.tiers
            .iter()
            .find(|t| viewport_width >= t.min_width)
            .map(|t| t.columns)
            .unwrap_or(self.fallback_columns)
    }

    pub fn tiers(&self) -> &[Breakpoint] {
        &self.tiers
    }

    pub fn fallback_columns(&self) -> usize {
        self.fallback_columns
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(
            DEFAULT_BREAKPOINTS
                .iter()
                .map(|&(min_width, columns)| Breakpoint { min_width, columns }),
            DEFAULT_FALLBACK_COLUMNS,
        )
    }
}

/// Column count for a viewport width using the default breakpoints
pub fn columns_for_width(viewport_width: i64) -> usize {
    match viewport_width {
        w if w >= 1536 => 6,
        w if w >= 1280 => 5,
        w if w >= 1024 => 4,
        w if w >= 640 => 2,
        _ => DEFAULT_FALLBACK_COLUMNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_edges() {
        assert_eq!(columns_for_width(1920), 6);
        assert_eq!(columns_for_width(1536), 6);
        assert_eq!(columns_for_width(1535), 5);
        assert_eq!(columns_for_width(1280), 5);
        assert_eq!(columns_for_width(1279), 4);
        assert_eq!(columns_for_width(1024), 4);
        assert_eq!(columns_for_width(1023), 2);
        assert_eq!(columns_for_width(640), 2);
        assert_eq!(columns_for_width(639), 1);
    }

    #[test]
    fn test_non_positive_width_gets_one_column() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(-200), 1);
    }

    #[test]
    fn test_table_matches_function() {
        let table = Breakpoints::default();
        for width in [-1, 0, 320, 639, 640, 800, 1023, 1024, 1279, 1280, 1535, 1536, 4000] {
            assert_eq!(table.columns_for(width), columns_for_width(width), "width {width}");
        }
    }

    #[test]
    fn test_custom_tiers_are_sorted_and_clamped() {
        let table = Breakpoints::new(
            [
                Breakpoint { min_width: 500, columns: 0 },
                Breakpoint { min_width: 900, columns: 3 },
            ],
            0,
        );

        assert_eq!(table.tiers()[0].min_width, 900);
        assert_eq!(table.columns_for(1000), 3);
        assert_eq!(table.columns_for(600), 1);
        assert_eq!(table.columns_for(100), 1);
    }

    #[test]
    fn test_deserialized_tiers_are_sorted() {
        let json = r#"{"tiers":[{"min_width":640,"columns":2},{"min_width":1536,"columns":6}],"fallback_columns":1}"#;
        let table: Breakpoints = serde_json::from_str(json).unwrap();

        assert_eq!(table.tiers()[0].min_width, 1536);
        assert_eq!(table.columns_for(2000), 6);
        assert_eq!(table.columns_for(800), 2);
        assert_eq!(table.columns_for(100), 1);
    }

    #[test]
    fn test_deserialized_zero_columns_are_clamped() {
        let json = r#"{"tiers":[{"min_width":0,"columns":0}],"fallback_columns":0}"#;
        let table: Breakpoints = serde_json::from_str(json).unwrap();

        assert_eq!(table.columns_for(100), 1);
        assert_eq!(table.columns_for(-1), 1);
        assert_eq!(table.fallback_columns(), 1);
    }
}
