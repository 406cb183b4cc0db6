//! Gallery layout optimizer
//!
//! Planned (future) memories come first, oldest date first, undated plans
//! last. Everything else follows, highest score first. The two groups are
//! packed independently so a row never mixes plans with past memories.

use crate::config::LayoutConfig;
use crate::packer::{GridRow, RowPacker};
use chrono::{DateTime, Utc};
use duo_core::MemoryRecord;
use serde::Serialize;

/// Result of one layout run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout<'a> {
    /// Columns per row used for packing
    pub columns: usize,

    /// Future rows first, then the scored rows
    pub rows: Vec<GridRow<'a>>,
}

impl<'a> GridLayout<'a> {
    /// Records in display order
    pub fn order(&self) -> impl Iterator<Item = &'a MemoryRecord> + '_ {
        self.rows.iter().flat_map(|row| row.items.iter().copied())
    }

    pub fn into_order(self) -> Vec<&'a MemoryRecord> {
        self.rows.into_iter().flat_map(|row| row.items).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(GridRow::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Layout optimizer bound to a breakpoint and scoring configuration
#[derive(Debug, Clone, Default)]
pub struct LayoutOptimizer {
    config: LayoutConfig,
}

impl LayoutOptimizer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Columns per row for a viewport width
    pub fn columns_for(&self, viewport_width: i64) -> usize {
        self.config.breakpoints.columns_for(viewport_width)
    }

    /// Lay out `records` for a viewport, scoring against `now`
    pub fn layout<'a>(
        &self,
        records: &'a [MemoryRecord],
        viewport_width: i64,
        now: DateTime<Utc>,
    ) -> GridLayout<'a> {
        let columns = self.columns_for(viewport_width);
        let packer = RowPacker::new(columns);

        let (mut futures, others): (Vec<&MemoryRecord>, Vec<&MemoryRecord>) =
            records.iter().partition(|r| r.is_future());

        // Undated plans sort after every dated one.
        futures.sort_by_key(|r| (r.start_date.is_none(), r.effective_date()));

        let mut scored: Vec<(i64, &MemoryRecord)> = others
            .into_iter()
            .map(|r| (self.config.weights.score(r, now), r))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        let others: Vec<&MemoryRecord> = scored.into_iter().map(|(_, r)| r).collect();

        let mut rows = packer.pack(&futures);
        let future_rows = rows.len();
        rows.extend(packer.pack(&others));

        tracing::debug!(
            records = records.len(),
            futures = futures.len(),
            others = others.len(),
            columns,
            future_rows,
            rows = rows.len(),
            "Computed grid layout"
        );

        GridLayout { columns, rows }
    }

    /// Records in display order
    pub fn optimize<'a>(
        &self,
        records: &'a [MemoryRecord],
        viewport_width: i64,
        now: DateTime<Utc>,
    ) -> Vec<&'a MemoryRecord> {
        self.layout(records, viewport_width, now).into_order()
    }
}

/// Records in display order, using the default configuration
pub fn optimize(records: &[MemoryRecord], viewport_width: i64, now: DateTime<Utc>) -> Vec<&MemoryRecord> {
    LayoutOptimizer::default().optimize(records, viewport_width, now)
}

/// Packed rows, using the default configuration
pub fn optimize_rows(records: &[MemoryRecord], viewport_width: i64, now: DateTime<Utc>) -> Vec<GridRow<'_>> {
    LayoutOptimizer::default().layout(records, viewport_width, now).rows
}
