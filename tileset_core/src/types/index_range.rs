//! This module provides the `IndexRange` struct, an inclusive interval of tile index values.
//!
//! Ranges are written as lowercase hex without padding: `"a"` for a single index,
//! `"a:b"` for an interval and `"a:"` for an interval that runs up to `ff`.
//!
//! # Examples
//!
//! ```rust
//! use tileset_core::types::IndexRange;
//!
//! let range: IndexRange = "10:1f".parse().unwrap();
//! assert_eq!(range, IndexRange::new(0x10, 0x1f).unwrap());
//! assert!(range.contains(0x12));
//! assert_eq!(range.to_string(), "10:1f");
//! ```

use crate::error::{Result, TilesetError};
use std::{fmt, str::FromStr};

/// An inclusive range of tile indices with `start <= end`.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct IndexRange {
	pub start: u8,
	pub end: u8,
}

impl IndexRange {
	/// Creates a range, rejecting inverted bounds.
	pub fn new(start: u8, end: u8) -> Result<Self> {
		if start > end {
			return Err(TilesetError::MalformedRange(format!("{start:x}:{end:x}")));
		}
		Ok(Self { start, end })
	}

	/// A range covering exactly one index. Used as the probe for point lookups.
	pub fn point(index: u8) -> Self {
		Self {
			start: index,
			end: index,
		}
	}

	pub fn contains(&self, index: u8) -> bool {
		self.start <= index && index <= self.end
	}

	pub fn len(&self) -> usize {
		(self.end - self.start) as usize + 1
	}

	pub fn is_point(&self) -> bool {
		self.start == self.end
	}

	pub fn overlaps(&self, other: &IndexRange) -> bool {
		self.start <= other.end && other.start <= self.end
	}

	pub fn iter(&self) -> impl Iterator<Item = u8> {
		self.start..=self.end
	}
}

impl FromStr for IndexRange {
	type Err = TilesetError;

	fn from_str(text: &str) -> Result<Self> {
		let malformed = || TilesetError::MalformedRange(text.to_string());
		let parse = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| malformed());

		let (first, last) = match text.split_once(':') {
			Some((first, last)) => (first, Some(last)),
			None => (text, None),
		};
		if first.is_empty() {
			return Err(malformed());
		}

		let start = parse(first)?;
		let end = match last {
			None => start,
			Some("") => u8::MAX,
			Some(last) => parse(last)?,
		};

		IndexRange::new(start, end).map_err(|_| malformed())
	}
}

impl fmt::Display for IndexRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_point() {
			write!(f, "{:x}", self.start)
		} else {
			write!(f, "{:x}:{:x}", self.start, self.end)
		}
	}
}

impl fmt::Debug for IndexRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "IndexRange[{},{}]", self.start, self.end)
	}
}
