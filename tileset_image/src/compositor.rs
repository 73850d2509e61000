use crate::{IndexedImage, OutputPalette};
use tileset_core::{
	Result, TilesetError,
	cache::{BoundedTileCache, TileSource},
	constants::{AIR_TILE_DATA, AIR_TILE_ID, METATILE_SIZE_PX, OUT_TILES_PER_ROW, TILE_SIZE_PX},
	types::{Color, Metatiles, Tiles},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositorOptions {
	/// Number of cells per output row.
	pub tiles_per_row: usize,
	/// Unresolved index drawn as the blank air tile instead of the sentinel.
	pub air_tile: Option<u8>,
}

impl Default for CompositorOptions {
	fn default() -> Self {
		Self {
			tiles_per_row: OUT_TILES_PER_ROW,
			air_tile: Some(AIR_TILE_ID),
		}
	}
}

/// Grid of `count` cells: `min(per_row, count)` wide and as many rows as needed.
fn grid(count: usize, per_row: usize) -> (usize, usize) {
	let per_row = per_row.max(1);
	(count.min(per_row), count.div_ceil(per_row))
}

/// Draws metatile sets, fetching tile pixels through a [`BoundedTileCache`].
pub struct MetatileCompositor<'a, S: TileSource> {
	cache: &'a mut BoundedTileCache<S>,
	options: CompositorOptions,
}

impl<'a, S: TileSource> MetatileCompositor<'a, S> {
	pub fn new(cache: &'a mut BoundedTileCache<S>, options: CompositorOptions) -> Self {
		Self { cache, options }
	}

	/// Renders every metatile of `set` as a 16×16 cell.
	///
	/// A corner whose index no tile reference covers is left as the sentinel slot, which is
	/// only reserved when `set.absent_tiles` is non-empty. Cache errors abort the image.
	pub fn compose(&mut self, set: &Metatiles) -> Result<IndexedImage> {
		if set.is_empty() {
			return Err(TilesetError::EmptyImage);
		}

		let palette = if set.absent_tiles.is_empty() {
			OutputPalette::new(&set.palette)
		} else {
			OutputPalette::with_sentinel(&set.palette)
		};

		let (columns, rows) = grid(set.len(), self.options.tiles_per_row);
		let mut image = IndexedImage::new(columns * METATILE_SIZE_PX, rows * METATILE_SIZE_PX, palette, 0);
		log::debug!(
			"composing {} metatiles into {}x{} pixels",
			set.len(),
			image.width(),
			image.height()
		);

		let mut unresolved_without_sentinel = 0usize;
		for (i, metatile) in set.metatiles.iter().enumerate() {
			let cell_x = (i % columns) * METATILE_SIZE_PX;
			let cell_y = (i / columns) * METATILE_SIZE_PX;

			for (corner, index) in metatile.corners().into_iter().enumerate() {
				let x = cell_x + (corner % 2) * TILE_SIZE_PX;
				let y = cell_y + (corner / 2) * TILE_SIZE_PX;

				match set.refs.resolve(index) {
					Some(tile) => {
						let data = self.cache.get_tile(tile.file, tile.position)?;
						image.blit_tile(x, y, &data);
					}
					None if Some(index) == self.options.air_tile => image.blit_tile(x, y, &AIR_TILE_DATA),
					None => {
						if !image.palette().has_sentinel() {
							unresolved_without_sentinel += 1;
						}
					}
				}
			}
		}

		if unresolved_without_sentinel > 0 {
			log::warn!("{unresolved_without_sentinel} corners have no tile data and no absent range, drawn with color 0");
		}

		Ok(image)
	}
}

/// Renders a plain tile sheet, one 8×8 cell per tile.
pub fn render_tiles(tiles: &Tiles, palette: &[Color]) -> Result<IndexedImage> {
	if tiles.is_empty() {
		return Err(TilesetError::EmptyImage);
	}

	let (columns, rows) = grid(tiles.len(), OUT_TILES_PER_ROW);
	let mut image = IndexedImage::new(
		columns * TILE_SIZE_PX,
		rows * TILE_SIZE_PX,
		OutputPalette::new(palette),
		0,
	);
	for (i, tile) in tiles.tiles.iter().enumerate() {
		image.blit_tile((i % columns) * TILE_SIZE_PX, (i / columns) * TILE_SIZE_PX, tile);
	}
	Ok(image)
}
