//! 2bpp tile data.
//!
//! Each tile is a 16 byte record of 8 rows. A row is two bytes, the low bit plane followed by
//! the high bit plane; bit 7 holds the leftmost pixel.

use crate::{
	constants::{BYTES_PER_TILE, PIXELS_PER_TILE, TILE_SIZE_PX},
	types::{TileData, Tiles},
};

/// Combines one row of bit planes into 8 pixel indices.
pub fn unpack(low: u8, high: u8) -> [u8; TILE_SIZE_PX] {
	let mut row = [0u8; TILE_SIZE_PX];
	for (i, pixel) in row.iter_mut().enumerate() {
		let shift = 7 - i;
		*pixel = ((low >> shift) & 1) | (((high >> shift) & 1) << 1);
	}
	row
}

/// Splits 8 pixel indices into the low and high bit plane bytes.
pub fn pack(row: &[u8]) -> (u8, u8) {
	row.iter().take(TILE_SIZE_PX).enumerate().fold((0, 0), |(low, high), (i, &pixel)| {
		let shift = 7 - i;
		(low | ((pixel & 1) << shift), high | (((pixel >> 1) & 1) << shift))
	})
}

pub fn decode_tile(record: &[u8; BYTES_PER_TILE]) -> TileData {
	let mut tile = [0u8; PIXELS_PER_TILE];
	for (row, planes) in tile.chunks_exact_mut(TILE_SIZE_PX).zip(record.chunks_exact(2)) {
		row.copy_from_slice(&unpack(planes[0], planes[1]));
	}
	tile
}

pub fn encode_tile(tile: &TileData) -> [u8; BYTES_PER_TILE] {
	let mut record = [0u8; BYTES_PER_TILE];
	for (planes, row) in record.chunks_exact_mut(2).zip(tile.chunks_exact(TILE_SIZE_PX)) {
		(planes[0], planes[1]) = pack(row);
	}
	record
}

/// Decodes every complete record; trailing bytes that do not form a whole tile are ignored.
pub fn decode_tiles(data: &[u8]) -> Tiles {
	let records = data.chunks_exact(BYTES_PER_TILE);
	if !records.remainder().is_empty() {
		log::warn!(
			"ignoring {} trailing bytes that do not form a complete tile",
			records.remainder().len()
		);
	}

	Tiles::new(
		records
			.map(|record| {
				let mut buffer = [0u8; BYTES_PER_TILE];
				buffer.copy_from_slice(record);
				decode_tile(&buffer)
			})
			.collect(),
	)
}

pub fn encode_tiles(tiles: &Tiles) -> Vec<u8> {
	tiles.tiles.iter().flat_map(encode_tile).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Rows alternate between 0b01010101/0b00110011 so all four colours appear.
	fn checkerboard_record() -> [u8; BYTES_PER_TILE] {
		let mut record = [0u8; BYTES_PER_TILE];
		for row in 0..TILE_SIZE_PX {
			record[row * 2] = if row % 2 == 0 { 0b0101_0101 } else { 0b1010_1010 };
			record[row * 2 + 1] = 0b0011_0011;
		}
		record
	}

	#[test]
	fn unpack_msb_first() {
		assert_eq!(unpack(0b1000_0000, 0b0000_0000), [1, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(unpack(0b0000_0000, 0b1000_0000), [2, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(unpack(0b0000_0001, 0b0000_0001), [0, 0, 0, 0, 0, 0, 0, 3]);
		assert_eq!(unpack(0b0101_0101, 0b0011_0011), [0, 1, 2, 3, 0, 1, 2, 3]);
	}

	#[test]
	fn pack_inverts_unpack() {
		for (low, high) in [(0x00, 0x00), (0xff, 0x00), (0x5a, 0xc3), (0xff, 0xff)] {
			assert_eq!(pack(&unpack(low, high)), (low, high));
		}
	}

	#[test]
	fn single_tile_file() {
		let tiles = decode_tiles(&checkerboard_record());
		assert_eq!(tiles.len(), 1);
		assert_eq!(tiles.tiles[0].len(), PIXELS_PER_TILE);
		assert!(tiles.tiles[0].iter().all(|&p| p <= 3));
		assert_eq!(&tiles.tiles[0][0..8], &[0, 1, 2, 3, 0, 1, 2, 3]);
		assert_eq!(&tiles.tiles[0][8..16], &[1, 0, 3, 2, 1, 0, 3, 2]);
	}

	#[test]
	fn trailing_bytes_are_ignored() {
		let mut data = checkerboard_record().to_vec();
		data.extend_from_slice(&checkerboard_record());
		data.extend_from_slice(&[0xff; 5]);
		assert_eq!(decode_tiles(&data).len(), 2);
		assert!(decode_tiles(&[0xff; 15]).is_empty());
	}

	#[test]
	fn encode_restores_binary() {
		let mut data = checkerboard_record().to_vec();
		data.extend((0..16).map(|b| b * 17));
		assert_eq!(encode_tiles(&decode_tiles(&data)), data);
	}
}
