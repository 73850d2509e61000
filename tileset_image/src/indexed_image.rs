use crate::OutputPalette;
use image::{Rgba, RgbaImage};
use tileset_core::{constants::TILE_SIZE_PX, types::TileData};

/// An image of palette slots, as produced by the compositor.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedImage {
	width: usize,
	height: usize,
	pixels: Vec<u8>,
	palette: OutputPalette,
}

impl IndexedImage {
	/// Creates an image with every pixel set to `fill`.
	pub fn new(width: usize, height: usize, palette: OutputPalette, fill: u8) -> Self {
		Self {
			width,
			height,
			pixels: vec![fill; width * height],
			palette,
		}
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn palette(&self) -> &OutputPalette {
		&self.palette
	}

	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	pub fn get(&self, x: usize, y: usize) -> Option<u8> {
		(x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
	}

	/// Copies an 8×8 tile to `(x, y)`, mapping its pixel indices through the palette.
	/// Pixels falling outside the image are dropped.
	pub fn blit_tile(&mut self, x: usize, y: usize, tile: &TileData) {
		for (row, line) in tile.chunks_exact(TILE_SIZE_PX).enumerate() {
			let ty = y + row;
			if ty >= self.height {
				break;
			}
			for (col, &pixel) in line.iter().enumerate() {
				let tx = x + col;
				if tx >= self.width {
					break;
				}
				self.pixels[ty * self.width + tx] = self.palette.slot(pixel);
			}
		}
	}

	/// The pixel data of the 8×8 block at `(x, y)` as output slots.
	pub fn tile_at(&self, x: usize, y: usize) -> Vec<u8> {
		(0..TILE_SIZE_PX)
			.flat_map(|row| (0..TILE_SIZE_PX).map(move |col| (x + col, y + row)))
			.filter_map(|(px, py)| self.get(px, py))
			.collect()
	}

	/// Converts to RGBA; the sentinel slot becomes fully transparent.
	pub fn to_rgba(&self) -> RgbaImage {
		let mut image = RgbaImage::new(self.width as u32, self.height as u32);
		for (pixel, &slot) in image.pixels_mut().zip(&self.pixels) {
			*pixel = Rgba(self.palette.rgba(slot));
		}
		image
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tileset_core::constants::DEFAULT_PALETTE;

	#[test]
	fn blit_and_convert() {
		let mut image = IndexedImage::new(10, 9, OutputPalette::with_sentinel(&DEFAULT_PALETTE), 0);
		image.blit_tile(4, 4, &[1; 64]);

		assert_eq!(image.get(3, 3), Some(0));
		assert_eq!(image.get(4, 4), Some(2));
		assert_eq!(image.get(9, 8), Some(2));
		assert_eq!(image.get(10, 8), None);
		assert_eq!(image.pixels().iter().filter(|&&p| p == 2).count(), 6 * 5);

		let rgba = image.to_rgba();
		assert_eq!(rgba.dimensions(), (10, 9));
		assert_eq!(rgba.get_pixel(0, 0).0[3], 0);
		assert_eq!(rgba.get_pixel(5, 5).0, [0xFF, 0xFF, 0xFF, 0xFF]);
	}

	#[test]
	fn tile_at_reads_back_a_block() {
		let mut image = IndexedImage::new(16, 8, OutputPalette::new(&DEFAULT_PALETTE), 0);
		let tile: TileData = std::array::from_fn(|i| (i % 4) as u8);
		image.blit_tile(8, 0, &tile);
		assert_eq!(image.tile_at(8, 0), tile.to_vec());
		assert_eq!(image.tile_at(0, 0), vec![0; 64]);
	}
}
