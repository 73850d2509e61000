//! Metatile records: four bytes per metatile, corners in the order
//! top-left, top-right, bottom-left, bottom-right.

use crate::{
	constants::BYTES_PER_METATILE,
	error::{Result, TilesetError},
	types::Metatile,
};
use std::path::Path;

pub fn decode_metatiles(data: &[u8], path: &Path) -> Result<Vec<Metatile>> {
	if data.len() % BYTES_PER_METATILE != 0 {
		return Err(TilesetError::decode(
			path,
			format!(
				"length {} is not a multiple of the {BYTES_PER_METATILE} byte metatile record",
				data.len()
			),
		));
	}

	Ok(data
		.chunks_exact(BYTES_PER_METATILE)
		.map(|record| Metatile::new(record[0], record[1], record[2], record[3]))
		.collect())
}

pub fn encode_metatiles(metatiles: &[Metatile]) -> Vec<u8> {
	metatiles.iter().flat_map(|m| m.to_record()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_records() {
		let metatiles = decode_metatiles(&[0, 1, 2, 3, 0xff, 0xff, 4, 5], Path::new("a.mtiles")).unwrap();
		assert_eq!(
			metatiles,
			vec![Metatile::new(0, 1, 2, 3), Metatile::new(0xff, 0xff, 4, 5)]
		);
		assert_eq!(encode_metatiles(&metatiles), vec![0, 1, 2, 3, 0xff, 0xff, 4, 5]);
	}

	#[test]
	fn partial_record_is_an_error() {
		let err = decode_metatiles(&[0, 1, 2], Path::new("a.mtiles")).unwrap_err();
		assert!(matches!(err, TilesetError::Decode { .. }));
		assert!(err.to_string().contains("not a multiple"));
	}

	#[test]
	fn empty_input() {
		assert!(decode_metatiles(&[], Path::new("a.mtiles")).unwrap().is_empty());
	}
}
