use super::IndexRange;
use crate::error::{Result, TilesetError};
use std::{
	fmt,
	path::{Path, PathBuf},
};

/// Maps the metatile indices of `range` onto tiles `offset..` of the tile data decoded from `file`.
#[derive(Clone, Eq, PartialEq)]
pub struct TileRef {
	pub file: PathBuf,
	pub range: IndexRange,
	pub offset: u8,
}

impl TileRef {
	pub fn new(file: impl Into<PathBuf>, range: IndexRange, offset: u8) -> Self {
		Self {
			file: file.into(),
			range,
			offset,
		}
	}

	/// A reference without a file, only usable as a lookup key.
	pub(crate) fn probe(index: u8) -> Self {
		Self {
			file: PathBuf::new(),
			range: IndexRange::point(index),
			offset: 0,
		}
	}

	/// Parses a `"<range>": "<file>[:<hex offset>]"` pair.
	///
	/// The offset is split off at the last `:` unless the suffix looks like part of a path,
	/// so `C:\tiles\a.chr` stays a plain file name.
	pub fn parse(range: &str, reference: &str) -> Result<Self> {
		let range = range.parse::<IndexRange>()?;

		let (file, offset) = match reference.rsplit_once(':') {
			Some((file, offset)) if !offset.contains(['/', '\\']) => {
				let offset =
					u8::from_str_radix(offset, 16).map_err(|_| TilesetError::MalformedOffset(reference.to_string()))?;
				(file, offset)
			}
			_ => (reference, 0),
		};

		if file.is_empty() {
			return Err(TilesetError::EmptyFileReference(range.to_string()));
		}

		Ok(Self::new(file, range, offset))
	}

	/// Position inside the decoded tile array for `index`, if the range covers it.
	pub fn tile_position(&self, index: u8) -> Option<usize> {
		self
			.range
			.contains(index)
			.then(|| self.offset as usize + (index - self.range.start) as usize)
	}

	/// Formats the reference value, i.e. `file` or `file:offset`.
	///
	/// A file name containing `:` always carries its offset, so [`parse`](Self::parse) splits it back
	/// at the right place.
	pub fn reference_string(&self) -> String {
		let file = self.file.to_string_lossy();
		if self.offset == 0 && !file.contains(':') {
			file.into_owned()
		} else {
			format!("{file}:{:x}", self.offset)
		}
	}

	pub fn file(&self) -> &Path {
		&self.file
	}
}

impl fmt::Debug for TileRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileRef[{} -> {}]", self.range, self.reference_string())
	}
}
