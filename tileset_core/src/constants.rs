//! Fixed geometry of the 2bpp tile format and the defaults used by the converters.

use crate::types::Color;

/// Edge length of a tile in pixels.
pub const TILE_SIZE_PX: usize = 8;

/// Number of pixel indices in one decoded tile.
pub const PIXELS_PER_TILE: usize = TILE_SIZE_PX * TILE_SIZE_PX;

/// Size of one encoded tile record: 8 rows of two bit planes.
pub const BYTES_PER_TILE: usize = TILE_SIZE_PX * 2;

/// Edge length of a metatile (2×2 tiles) in pixels.
pub const METATILE_SIZE_PX: usize = TILE_SIZE_PX * 2;

/// Size of one encoded metatile record.
pub const BYTES_PER_METATILE: usize = 4;

/// Number of tiles (or metatiles) per row in rendered images.
pub const OUT_TILES_PER_ROW: usize = 16;

/// Number of colours a 2bpp palette holds.
pub const PALETTE_SIZE: usize = 4;

/// Index conventionally used for the empty "air" tile.
pub const AIR_TILE_ID: u8 = 0xFF;

/// Pixel data of the air tile: every pixel uses colour 0.
pub const AIR_TILE_DATA: [u8; PIXELS_PER_TILE] = [0; PIXELS_PER_TILE];

/// Default bound of the tile cache in KiB.
pub const DEFAULT_CACHE_SIZE_KIB: u64 = 1024;

pub const DEFAULT_OUT_DIR: &str = "extracted";
pub const EXTENSION_TILE_DATA: &str = "chr";
pub const EXTENSION_METATILE_DATA: &str = "mtiles";
pub const EXTENSION_JSON: &str = "json";
pub const EXTENSION_PNG: &str = "png";

/// Black, white, light grey, dark grey.
pub const DEFAULT_PALETTE: [Color; PALETTE_SIZE] = [
	Color::rgb(0x00, 0x00, 0x00),
	Color::rgb(0xFF, 0xFF, 0xFF),
	Color::rgb(0x7F, 0x7F, 0x7F),
	Color::rgb(0x3F, 0x3F, 0x3F),
];
