use std::path::{Path, PathBuf};

/// Errors raised while parsing, decoding, caching or composing tile data.
///
/// Record-level variants (`MalformedRange`, `EmptyFileReference`, `MalformedOffset`,
/// `MalformedMetatile`) are logged and skipped by the parsers; the others abort the
/// conversion of the current file.
#[derive(Debug, thiserror::Error)]
pub enum TilesetError {
	#[error("malformed index range {0:?}")]
	MalformedRange(String),

	#[error("tile reference for range {0:?} has no file path")]
	EmptyFileReference(String),

	#[error("malformed tile offset {0:?}")]
	MalformedOffset(String),

	#[error("malformed metatile entry: {0}")]
	MalformedMetatile(String),

	#[error("tile {position} is out of range for {path:?}, which holds {count} tiles")]
	IndexOutOfRange { path: PathBuf, position: usize, count: usize },

	#[error("could not decode {path:?}: {reason}")]
	Decode { path: PathBuf, reason: String },

	#[error("palette must contain exactly {expected} colors, got {actual}")]
	WrongPaletteLength { expected: usize, actual: usize },

	#[error("there are no tiles to compose")]
	EmptyImage,
}

impl TilesetError {
	pub fn decode(path: &Path, reason: impl ToString) -> Self {
		Self::Decode {
			path: path.to_path_buf(),
			reason: reason.to_string(),
		}
	}
}

pub type Result<T, E = TilesetError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		assert_eq!(
			TilesetError::MalformedRange("3:1".to_string()).to_string(),
			"malformed index range \"3:1\""
		);
		assert_eq!(
			TilesetError::decode(Path::new("a.chr"), "unexpected end of file").to_string(),
			"could not decode \"a.chr\": unexpected end of file"
		);
		assert_eq!(
			TilesetError::IndexOutOfRange {
				path: PathBuf::from("a.chr"),
				position: 7,
				count: 2
			}
			.to_string(),
			"tile 7 is out of range for \"a.chr\", which holds 2 tiles"
		);
		assert_eq!(
			TilesetError::WrongPaletteLength { expected: 4, actual: 3 }.to_string(),
			"palette must contain exactly 4 colors, got 3"
		);
	}
}
