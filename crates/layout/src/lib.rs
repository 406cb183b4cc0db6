//! Grid layout engine for the memory gallery
//!
//! Orders memory cards for a responsive grid:
//! - [`score`] ranks a memory by kind, recency, photos and metadata
//! - [`columns_for_width`] maps a viewport width to a column count
//! - [`RowPacker`] greedily fills fixed-width rows with 1- and 2-column cards
//! - [`LayoutOptimizer`] puts planned (future) memories first in date order,
//!   then the rest by score, packing each group into its own rows
//!
//! Every entry point is pure: the caller supplies `now`, nothing is cached
//! between calls, and no input can make layout fail.

pub mod columns;
pub mod config;
pub mod optimizer;
pub mod packer;
pub mod score;

pub use columns::{columns_for_width, Breakpoint, Breakpoints};
pub use config::{LayoutConfig, RecencyTier, ScoreWeights};
pub use optimizer::{optimize, optimize_rows, GridLayout, LayoutOptimizer};
pub use packer::{GridRow, RowPacker};
pub use score::score;
