use crate::{codec::read_tile_file, error::Result, types::Tiles};
use std::{
	fmt::Debug,
	path::{Path, PathBuf},
};

/// Produces the fully decoded tiles of one tile data file.
pub trait TileSource: Debug {
	fn load(&self, file: &Path) -> Result<Tiles>;
}

/// Reads `.chr` files from disk. Relative paths are resolved against `base_dir`.
#[derive(Clone, Debug, Default)]
pub struct ChrFileSource {
	base_dir: PathBuf,
}

impl ChrFileSource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
		Self {
			base_dir: base_dir.into(),
		}
	}
}

impl TileSource for ChrFileSource {
	fn load(&self, file: &Path) -> Result<Tiles> {
		read_tile_file(&self.base_dir.join(file))
	}
}
