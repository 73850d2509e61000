//! Index of tile references and of indices that could not be resolved.

mod absent_ranges;
mod tile_reference_index;

pub use absent_ranges::{AbsentRanges, collapse_runs};
pub use tile_reference_index::{ResolvedTile, TileReferenceIndex};
