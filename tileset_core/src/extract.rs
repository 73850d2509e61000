//! Builds a [`Metatiles`] set from decoded metatile records and the tile file they index.

use crate::{
	constants::{AIR_TILE_ID, DEFAULT_PALETTE},
	error::Result,
	types::{Color, IndexRange, Metatile, Metatiles, TileRef},
};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct ExtractOptions {
	pub palette: Vec<Color>,
	/// Registered in every set, in addition to the tile file itself.
	pub empty_tile: Option<TileRef>,
	/// Index rendered as the blank air tile when nothing covers it; never recorded as absent.
	pub air_tile: Option<u8>,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self {
			palette: DEFAULT_PALETTE.to_vec(),
			empty_tile: None,
			air_tile: Some(AIR_TILE_ID),
		}
	}
}

/// Indexes `tile_file` (holding `tile_count` tiles) for indices `0..tile_count`, adds the
/// configured empty tile and records every corner index that remains unresolved.
pub fn extract_metatiles(
	metatiles: Vec<Metatile>,
	tile_file: &Path,
	tile_count: usize,
	options: &ExtractOptions,
) -> Result<Metatiles> {
	let mut set = Metatiles::new(options.palette.clone())?;

	match tile_count {
		0 => log::warn!("{tile_file:?} holds no tiles"),
		count => {
			if count > 256 {
				log::warn!("{tile_file:?} holds {count} tiles, only the first 256 can be indexed");
			}
			let end = u8::try_from(count - 1).unwrap_or(u8::MAX);
			set.refs.insert(TileRef::new(tile_file, IndexRange { start: 0, end }, 0));
		}
	}

	if let Some(empty_tile) = &options.empty_tile {
		match set.refs.overlapping(empty_tile.range) {
			Some(existing) => log::warn!("empty tile {empty_tile:?} overlaps {existing:?}, not adding it"),
			None => set.refs.insert(empty_tile.clone()),
		}
	}

	set.metatiles = metatiles;
	set.record_absent(options.air_tile);
	Ok(set)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TilesetError;
	use pretty_assertions::assert_eq;

	fn absent(set: &Metatiles) -> Vec<String> {
		set.absent_tiles.iter().map(ToString::to_string).collect()
	}

	#[test]
	fn unresolved_indices_collapse_into_runs() {
		let records = vec![Metatile::new(0, 1, 5, 6), Metatile::new(7, 10, 0xff, 3)];
		let set = extract_metatiles(records, Path::new("a.chr"), 4, &ExtractOptions::default()).unwrap();

		let refs: Vec<String> = set.refs.iter().map(|r| format!("{r:?}")).collect();
		assert_eq!(refs, vec!["TileRef[0:3 -> a.chr]"]);
		assert_eq!(absent(&set), vec!["5:7", "a"]);
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn empty_tile_is_registered() {
		let options = ExtractOptions {
			empty_tile: Some(TileRef::new("empty.chr", IndexRange::point(0x80), 0)),
			..ExtractOptions::default()
		};
		let set = extract_metatiles(vec![Metatile::new(0, 0x80, 0x81, 0xff)], Path::new("a.chr"), 1, &options).unwrap();
		assert_eq!(set.refs.len(), 2);
		assert!(set.refs.contains(0x80));
		assert_eq!(absent(&set), vec!["81"]);
	}

	#[test]
	fn overlapping_empty_tile_is_skipped() {
		let options = ExtractOptions {
			empty_tile: Some(TileRef::new("empty.chr", IndexRange::point(2), 0)),
			..ExtractOptions::default()
		};
		let set = extract_metatiles(vec![], Path::new("a.chr"), 4, &options).unwrap();
		assert_eq!(set.refs.len(), 1);
		assert_eq!(set.refs.resolve(2).map(|r| r.file), Some(Path::new("a.chr")));
	}

	#[test]
	fn air_tile_is_absent_without_an_air_index() {
		let options = ExtractOptions {
			air_tile: None,
			..ExtractOptions::default()
		};
		let set = extract_metatiles(vec![Metatile::new(0xff, 0, 0, 0)], Path::new("a.chr"), 1, &options).unwrap();
		assert_eq!(absent(&set), vec!["ff"]);
	}

	#[test]
	fn large_tile_files_are_capped() {
		let set = extract_metatiles(vec![], Path::new("a.chr"), 300, &ExtractOptions::default()).unwrap();
		assert_eq!(set.refs.find(0xff).map(|r| r.range), Some(IndexRange { start: 0, end: 0xff }));

		let set = extract_metatiles(vec![], Path::new("a.chr"), 0, &ExtractOptions::default()).unwrap();
		assert!(set.refs.is_empty());
	}

	#[test]
	fn palette_is_validated() {
		let options = ExtractOptions {
			palette: vec![],
			..ExtractOptions::default()
		};
		assert!(matches!(
			extract_metatiles(vec![], Path::new("a.chr"), 1, &options),
			Err(TilesetError::WrongPaletteLength { .. })
		));
	}
}
