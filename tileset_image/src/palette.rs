use tileset_core::types::Color;

/// Colour written for the reserved sentinel slot. It is rendered fully transparent.
pub const SENTINEL_COLOR: Color = Color::rgb(0xFF, 0x00, 0xFF);

/// The palette of a rendered image.
///
/// With a sentinel, slot 0 is reserved for unresolved tiles and every tile pixel index is
/// shifted up by one.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputPalette {
	colors: Vec<Color>,
	sentinel: bool,
}

impl OutputPalette {
	pub fn new(palette: &[Color]) -> Self {
		Self {
			colors: palette.to_vec(),
			sentinel: false,
		}
	}

	pub fn with_sentinel(palette: &[Color]) -> Self {
		let mut colors = Vec::with_capacity(palette.len() + 1);
		colors.push(SENTINEL_COLOR);
		colors.extend_from_slice(palette);
		Self { colors, sentinel: true }
	}

	pub fn has_sentinel(&self) -> bool {
		self.sentinel
	}

	/// Slot of the sentinel colour, if reserved.
	pub fn sentinel_slot(&self) -> Option<u8> {
		self.sentinel.then_some(0)
	}

	/// Output slot for a tile pixel index.
	#[inline]
	pub fn slot(&self, pixel: u8) -> u8 {
		pixel + u8::from(self.sentinel)
	}

	/// RGBA value of an output slot. Unknown slots render as transparent black.
	pub fn rgba(&self, slot: u8) -> [u8; 4] {
		if Some(slot) == self.sentinel_slot() {
			return SENTINEL_COLOR.to_rgba(0);
		}
		self
			.colors
			.get(slot as usize)
			.map_or([0, 0, 0, 0], |color| color.to_rgba(0xFF))
	}

	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}
