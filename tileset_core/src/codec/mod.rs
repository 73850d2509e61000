//! Binary `.chr` tile data and `.mtiles` metatile records.

mod chr;
mod mtiles;

pub use chr::*;
pub use mtiles::*;

use crate::{
	error::{Result, TilesetError},
	types::{Metatile, Tiles},
};
use std::{fs, path::Path};

/// Reads and decodes a `.chr` file.
pub fn read_tile_file(path: &Path) -> Result<Tiles> {
	let data = fs::read(path).map_err(|e| TilesetError::decode(path, e))?;
	log::debug!("decoding {} bytes of tile data from {path:?}", data.len());
	Ok(decode_tiles(&data))
}

/// Reads and decodes a `.mtiles` file.
pub fn read_metatile_file(path: &Path) -> Result<Vec<Metatile>> {
	let data = fs::read(path).map_err(|e| TilesetError::decode(path, e))?;
	decode_metatiles(&data, path)
}
