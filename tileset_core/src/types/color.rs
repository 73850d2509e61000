use std::{fmt, str::FromStr};

/// An opaque RGB palette colour, written as six hex digits (`"7f7f7f"`).
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn to_rgba(self, alpha: u8) -> [u8; 4] {
		[self.r, self.g, self.b, alpha]
	}
}

impl FromStr for Color {
	type Err = String;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		if text.len() != 6 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(format!("color {text:?} must have exactly 6 hex digits"));
		}
		let value = u32::from_str_radix(text, 16).map_err(|e| format!("color {text:?} is not hex: {e}"))?;
		Ok(Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8))
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

impl fmt::Debug for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Color(#{self})")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_and_display() {
		let color: Color = "1a2B3c".parse().unwrap();
		assert_eq!(color, Color::rgb(0x1a, 0x2b, 0x3c));
		assert_eq!(color.to_string(), "1a2b3c");
		assert_eq!(format!("{color:?}"), "Color(#1a2b3c)");
	}

	#[test]
	fn parse_invalid() {
		assert!("fff".parse::<Color>().is_err());
		assert!("gg0000".parse::<Color>().is_err());
		assert!("+12345".parse::<Color>().is_err());
	}
}
