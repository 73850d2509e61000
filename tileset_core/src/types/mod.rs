//! Plain data types shared by the index, the cache and the codecs.

mod color;
mod index_range;
mod metatile;
mod metatiles;
mod tile_ref;
mod tiles;

pub use color::Color;
pub use index_range::IndexRange;
pub use metatile::Metatile;
pub(crate) use metatiles::check_palette;
pub use metatiles::Metatiles;
pub use tile_ref::TileRef;
pub use tiles::{TileData, Tiles};
