//! The portable JSON forms of metatile sets and tile sheets.
//!
//! A metatile set is written as
//!
//! ```json
//! {
//!   "type": "metatile_data",
//!   "tiles": { "0:3f": "tiles/a.chr", "40": "tiles/b.chr:1a" },
//!   "absent_tiles": ["41:43"],
//!   "metatiles": [{ "tl": "0", "tr": "1", "bl": "40", "br": "41" }],
//!   "palette": ["000000", "ffffff", "7f7f7f", "3f3f3f"]
//! }
//! ```
//!
//! and a tile sheet as `{"type": "tile_data", "tiles": [<base64>], "palette": [...]}`.

mod keys;
mod parse;
mod serialize;

pub use parse::{JsonDocument, parse_document, parse_metatiles, parse_tiles};
pub use serialize::{metatiles_to_value, tiles_to_value, to_pretty_string};

use crate::{
	error::{Result, TilesetError},
	types::{Metatiles, Tiles},
};
use std::{fs, path::Path};

pub fn metatiles_to_string(set: &Metatiles) -> String {
	to_pretty_string(&metatiles_to_value(set))
}

pub fn tiles_to_string(tiles: &Tiles) -> String {
	to_pretty_string(&tiles_to_value(tiles))
}

/// Reads and parses a JSON file of either form.
pub fn read_document(path: &Path) -> Result<JsonDocument> {
	let text = fs::read_to_string(path).map_err(|err| TilesetError::decode(path, err))?;
	parse_document(&text, path)
}
