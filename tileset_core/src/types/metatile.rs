use crate::constants::BYTES_PER_METATILE;

/// A 2×2 block of tile indices.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Metatile {
	pub top_left: u8,
	pub top_right: u8,
	pub bottom_left: u8,
	pub bottom_right: u8,
}

impl Metatile {
	pub fn new(top_left: u8, top_right: u8, bottom_left: u8, bottom_right: u8) -> Self {
		Self {
			top_left,
			top_right,
			bottom_left,
			bottom_right,
		}
	}

	pub fn from_record(record: [u8; BYTES_PER_METATILE]) -> Self {
		let [top_left, top_right, bottom_left, bottom_right] = record;
		Self::new(top_left, top_right, bottom_left, bottom_right)
	}

	pub fn to_record(self) -> [u8; BYTES_PER_METATILE] {
		self.corners()
	}

	/// Corner indices in record order: top-left, top-right, bottom-left, bottom-right.
	pub fn corners(&self) -> [u8; 4] {
		[self.top_left, self.top_right, self.bottom_left, self.bottom_right]
	}
}
