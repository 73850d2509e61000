use super::Color;
use crate::constants::{DEFAULT_PALETTE, PIXELS_PER_TILE};

/// One decoded tile: 64 pixel indices in row-major order, each in `0..=3`.
pub type TileData = [u8; PIXELS_PER_TILE];

/// The fully decoded content of one tile data file.
#[derive(Clone, Debug, PartialEq)]
pub struct Tiles {
	pub tiles: Vec<TileData>,
	pub palette: Vec<Color>,
}

impl Tiles {
	pub fn new(tiles: Vec<TileData>) -> Self {
		Self {
			tiles,
			palette: DEFAULT_PALETTE.to_vec(),
		}
	}

	pub fn len(&self) -> usize {
		self.tiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tiles.is_empty()
	}

	pub fn get(&self, position: usize) -> Option<&TileData> {
		self.tiles.get(position)
	}

	/// Decoded size in bytes, the unit the tile cache is bounded by.
	pub fn size_bytes(&self) -> u64 {
		(self.tiles.len() * PIXELS_PER_TILE) as u64
	}
}
