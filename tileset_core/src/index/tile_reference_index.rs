use crate::{
	tree::{OrderedRangeStore, RangeOrder},
	types::{IndexRange, TileRef},
};
use std::path::Path;

/// Where the pixel data of one metatile index lives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolvedTile<'a> {
	pub file: &'a Path,
	pub position: usize,
}

/// Maps index ranges to the tile data files they are read from.
///
/// Not synchronised; callers that share an index between threads must lock around it.
#[derive(Clone)]
pub struct TileReferenceIndex {
	refs: OrderedRangeStore<TileRef, RangeOrder>,
}

impl TileReferenceIndex {
	pub fn new() -> Self {
		Self::with_order(RangeOrder::default())
	}

	pub fn with_order(order: RangeOrder) -> Self {
		Self {
			refs: OrderedRangeStore::new(order),
		}
	}

	pub fn order(&self) -> RangeOrder {
		*self.refs.comparator()
	}

	/// Registers a reference. Ranges are expected not to overlap already registered ones;
	/// [`overlapping`](Self::overlapping) lets callers check first.
	pub fn insert(&mut self, tile_ref: TileRef) {
		log::trace!("register {tile_ref:?}");
		self.refs.insert(tile_ref);
	}

	/// Returns a registered reference that overlaps `range`, if any.
	pub fn overlapping(&self, range: IndexRange) -> Option<&TileRef> {
		self.refs.iter().find(|r| r.range.overlaps(&range))
	}

	pub fn find(&self, index: u8) -> Option<&TileRef> {
		self.refs.find(&TileRef::probe(index))
	}

	/// Resolves a metatile index to its file and the position inside the decoded tile array.
	pub fn resolve(&self, index: u8) -> Option<ResolvedTile<'_>> {
		let tile_ref = self.find(index)?;
		let position = tile_ref.tile_position(index)?;
		Some(ResolvedTile {
			file: &tile_ref.file,
			position,
		})
	}

	pub fn contains(&self, index: u8) -> bool {
		self.find(index).is_some()
	}

	pub fn len(&self) -> usize {
		self.refs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.refs.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &TileRef> {
		self.refs.iter()
	}
}

impl Default for TileReferenceIndex {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for TileReferenceIndex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.refs.iter()).finish()
	}
}
