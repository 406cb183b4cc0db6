//! Greedy row packing for the memory grid

use duo_core::{MemoryKind, MemoryRecord};
use serde::Serialize;

/// One packed grid row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow<'a> {
    /// Records in placement order
    pub items: Vec<&'a MemoryRecord>,

    /// Columns consumed, capped at the row width
    pub width: usize,
}

impl<'a> GridRow<'a> {
    fn empty() -> Self {
        Self {
            items: Vec::new(),
            width: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether a record of `kind` already sits in this row
    pub fn contains_kind(&self, kind: MemoryKind) -> bool {
        self.items.iter().any(|r| r.kind == kind)
    }

    /// Sum of the item widths, uncapped
    pub fn span(&self) -> usize {
        self.items.iter().map(|r| r.width()).sum()
    }

    fn push(&mut self, record: &'a MemoryRecord, columns: usize) {
        self.width = (self.width + record.width()).min(columns);
        self.items.push(record);
    }
}

/// Packs an ordered list of records into rows of a fixed column count.
///
/// Placement rules for a non-empty row, first candidate in list order wins:
/// 1. it fits, has a kind not yet in the row, and if wide, the row is still
///    in its first half;
/// 2. failing that, it fits;
/// 3. failing that, the row is closed and packing resumes on a fresh row.
///
/// An empty row always takes the first remaining candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPacker {
    columns: usize,
}

impl RowPacker {
    /// Create a packer; a zero column count is treated as one column
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Pack `candidates` into rows, preserving list order as the tie-breaker
    pub fn pack<'a>(&self, candidates: &[&'a MemoryRecord]) -> Vec<GridRow<'a>> {
        let mut placed = vec![false; candidates.len()];
        let mut remaining = candidates.len();
        let mut rows = Vec::new();
        let mut row = GridRow::empty();

        while remaining > 0 {
            let pick = if row.is_empty() {
                placed.iter().position(|done| !done)
            } else {
                self.select(&row, candidates, &placed)
            };

            let Some(index) = pick else {
                self.flush(&mut row, &mut rows);
                continue;
            };

            placed[index] = true;
            remaining -= 1;
            row.push(candidates[index], self.columns);

            if row.width >= self.columns {
                self.flush(&mut row, &mut rows);
            }
        }

        if !row.is_empty() {
            self.flush(&mut row, &mut rows);
        }

        rows
    }

    fn select(&self, row: &GridRow<'_>, candidates: &[&MemoryRecord], placed: &[bool]) -> Option<usize> {
        let fits = |r: &MemoryRecord| row.width + r.width() <= self.columns;
        let open = candidates.iter().enumerate().filter(|(i, _)| !placed[*i]);

        open.clone()
            .find(|(_, r)| {
                fits(**r) && !row.contains_kind(r.kind) && (!r.kind.is_wide() || self.in_first_half(row))
            })
            .or_else(|| open.clone().find(|(_, r)| fits(**r)))
            .map(|(i, _)| i)
    }

    // Wide cards may only start before the middle of the row.
    fn in_first_half(&self, row: &GridRow<'_>) -> bool {
        2 * row.width < self.columns
    }

    fn flush<'a>(&self, row: &mut GridRow<'a>, rows: &mut Vec<GridRow<'a>>) {
        let full = std::mem::replace(row, GridRow::empty());
        tracing::trace!(
            row = rows.len(),
            items = full.len(),
            width = full.width,
            columns = self.columns,
            "Flushed grid row"
        );
        rows.push(full);
    }
}
