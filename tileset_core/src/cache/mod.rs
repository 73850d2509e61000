//! Size-bounded cache of decoded tile data files.

mod source;
mod tile_cache;

pub use source::{ChrFileSource, TileSource};
pub use tile_cache::BoundedTileCache;
