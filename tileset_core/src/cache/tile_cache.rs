use super::{ChrFileSource, TileSource};
use crate::{
	error::{Result, TilesetError},
	normalize_path,
	types::{TileData, Tiles},
};
use lru::LruCache;
use std::path::{Path, PathBuf};

struct CacheEntry {
	tiles: Tiles,
	size_bytes: u64,
}

/// Caches decoded tile files, least recently used first out, bounded by decoded size.
///
/// A file is decoded as a whole on its first access and evicted as a whole. A bound of `0`
/// disables eviction. A single file larger than the bound is still admitted, after
/// everything else has been evicted.
///
/// The cache is not synchronised. Sharing it between threads requires external locking.
pub struct BoundedTileCache<S = ChrFileSource> {
	entries: LruCache<PathBuf, CacheEntry>,
	source: S,
	max_size_bytes: u64,
	current_size_bytes: u64,
}

impl BoundedTileCache<ChrFileSource> {
	/// A cache reading `.chr` files from disk, bounded in KiB. Bounds beyond `u64::MAX` bytes saturate.
	pub fn from_kib(max_size_kib: u64) -> Self {
		Self::new(ChrFileSource::new(), max_size_kib.saturating_mul(1024))
	}
}

impl<S: TileSource> BoundedTileCache<S> {
	pub fn new(source: S, max_size_bytes: u64) -> Self {
		Self {
			entries: LruCache::unbounded(),
			source,
			max_size_bytes,
			current_size_bytes: 0,
		}
	}

	/// Returns tile `position` of `file`, decoding the file on a miss.
	pub fn get_tile(&mut self, file: &Path, position: usize) -> Result<TileData> {
		let tiles = self.tiles(file)?;
		tiles.get(position).copied().ok_or_else(|| TilesetError::IndexOutOfRange {
			path: file.to_path_buf(),
			position,
			count: tiles.len(),
		})
	}

	/// Returns all tiles of `file` and marks it as most recently used.
	///
	/// Files are keyed by their normalised path, so `a/../b.chr` and `b.chr` share one entry.
	pub fn tiles(&mut self, file: &Path) -> Result<&Tiles> {
		let key = normalize_path(file);
		if !self.entries.contains(&key) {
			self.load(key.clone())?;
		}
		self
			.entries
			.get(&key)
			.map(|entry| &entry.tiles)
			.ok_or_else(|| TilesetError::decode(file, "file was evicted while loading"))
	}

	fn load(&mut self, file: PathBuf) -> Result<()> {
		let tiles = self.source.load(&file)?;
		let size_bytes = tiles.size_bytes();
		log::debug!("cache miss for {file:?}, decoded {} tiles ({size_bytes} bytes)", tiles.len());

		self.make_room(size_bytes);
		self.entries.push(file, CacheEntry { tiles, size_bytes });
		self.current_size_bytes = self.current_size_bytes.saturating_add(size_bytes);
		Ok(())
	}

	fn make_room(&mut self, incoming: u64) {
		if self.max_size_bytes == 0 {
			return;
		}
		while self.current_size_bytes.saturating_add(incoming) > self.max_size_bytes {
			let Some((file, entry)) = self.entries.pop_lru() else {
				break;
			};
			log::debug!("evicting {file:?} ({} bytes)", entry.size_bytes);
			if entry.size_bytes > self.current_size_bytes {
				log::warn!(
					"cache size accounting drifted: evicted {} bytes from a total of {}",
					entry.size_bytes,
					self.current_size_bytes
				);
				self.current_size_bytes = 0;
			} else {
				self.current_size_bytes -= entry.size_bytes;
			}
		}
	}

	pub fn contains(&self, file: &Path) -> bool {
		self.entries.contains(&normalize_path(file))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn current_size_bytes(&self) -> u64 {
		self.current_size_bytes
	}

	pub fn max_size_bytes(&self) -> u64 {
		self.max_size_bytes
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Cached files, least recently used first.
	pub fn files(&self) -> Vec<&Path> {
		self.entries.iter().rev().map(|(file, _)| file.as_path()).collect()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		self.current_size_bytes = 0;
	}
}

impl<S> std::fmt::Debug for BoundedTileCache<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BoundedTileCache")
			.field("files", &self.entries.len())
			.field("current_size_bytes", &self.current_size_bytes)
			.field("max_size_bytes", &self.max_size_bytes)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::constants::PIXELS_PER_TILE;

	/// Every file holds one tile.
	#[derive(Debug)]
	struct SingleTileSource;

	impl TileSource for SingleTileSource {
		fn load(&self, _file: &Path) -> Result<Tiles> {
			Ok(Tiles::new(vec![[0; PIXELS_PER_TILE]]))
		}
	}

	#[test]
	fn from_kib_saturates() {
		assert_eq!(BoundedTileCache::from_kib(2).max_size_bytes(), 2048);
		assert_eq!(BoundedTileCache::from_kib(u64::MAX).max_size_bytes(), u64::MAX);
	}

	#[test]
	fn drifted_accounting_is_clamped_on_eviction() {
		let tile_bytes = PIXELS_PER_TILE as u64;
		let mut cache = BoundedTileCache::new(SingleTileSource, tile_bytes);
		cache.get_tile(Path::new("a"), 0).unwrap();
		assert_eq!(cache.current_size_bytes(), tile_bytes);

		// pretend fewer bytes are held than the entry really has
		cache.current_size_bytes = 1;
		cache.get_tile(Path::new("b"), 0).unwrap();

		assert_eq!(cache.files(), vec![Path::new("b")]);
		assert_eq!(cache.current_size_bytes(), tile_bytes);
	}
}
