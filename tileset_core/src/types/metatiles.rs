use super::{Color, Metatile};
use crate::{
	constants::{DEFAULT_PALETTE, PALETTE_SIZE},
	error::{Result, TilesetError},
	index::{AbsentRanges, TileReferenceIndex},
	normalize_path,
};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// A metatile set together with everything needed to render it.
///
/// Built once per metatile file, then either composed into an image or written out as JSON.
#[derive(Clone, Debug)]
pub struct Metatiles {
	pub palette: Vec<Color>,
	pub refs: TileReferenceIndex,
	pub absent_tiles: AbsentRanges,
	pub metatiles: Vec<Metatile>,
}

impl Metatiles {
	pub fn new(palette: Vec<Color>) -> Result<Self> {
		check_palette(&palette)?;
		Ok(Self {
			palette,
			refs: TileReferenceIndex::new(),
			absent_tiles: AbsentRanges::new(),
			metatiles: Vec::new(),
		})
	}

	pub fn set_palette(&mut self, palette: Vec<Color>) -> Result<()> {
		check_palette(&palette)?;
		self.palette = palette;
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.metatiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.metatiles.is_empty()
	}

	/// Corner indices that no tile reference covers, sorted and without duplicates.
	/// `air_tile` is never reported.
	pub fn unresolved_indices(&self, air_tile: Option<u8>) -> Vec<u8> {
		self
			.metatiles
			.iter()
			.flat_map(Metatile::corners)
			.filter(|&index| Some(index) != air_tile && !self.refs.contains(index))
			.sorted_unstable()
			.dedup()
			.collect()
	}

	/// Adds every unresolved corner index to `absent_tiles`, collapsed into runs.
	pub fn record_absent(&mut self, air_tile: Option<u8>) {
		let unresolved = self.unresolved_indices(air_tile);
		if !unresolved.is_empty() {
			log::info!("{} tile indices have no tile data", unresolved.len());
		}
		self.absent_tiles.record(unresolved);
	}

	/// Resolves relative tile file paths against `base`, e.g. the directory of the JSON file
	/// the set was read from. The results are normalised, so `json/../a.chr` becomes `a.chr`.
	pub fn rebase(&mut self, base: &Path) {
		self.map_files(|file| normalize_path(&base.join(file)));
	}

	/// Rewrites the file of every tile reference.
	pub fn map_files(&mut self, mut f: impl FnMut(&Path) -> PathBuf) {
		let mut refs = TileReferenceIndex::with_order(self.refs.order());
		for tile_ref in self.refs.iter() {
			let mut tile_ref = tile_ref.clone();
			tile_ref.file = f(&tile_ref.file);
			refs.insert(tile_ref);
		}
		self.refs = refs;
	}

	/// Distinct tile data files referenced by the index, in index order.
	pub fn referenced_files(&self) -> Vec<&Path> {
		self.refs.iter().map(|r| r.file()).unique().collect()
	}
}

impl Default for Metatiles {
	fn default() -> Self {
		Self {
			palette: DEFAULT_PALETTE.to_vec(),
			refs: TileReferenceIndex::new(),
			absent_tiles: AbsentRanges::new(),
			metatiles: Vec::new(),
		}
	}
}

pub(crate) fn check_palette(palette: &[Color]) -> Result<()> {
	if palette.len() == PALETTE_SIZE {
		Ok(())
	} else {
		Err(TilesetError::WrongPaletteLength {
			expected: PALETTE_SIZE,
			actual: palette.len(),
		})
	}
}
