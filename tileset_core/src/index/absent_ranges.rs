use crate::{
	tree::{OrderedRangeStore, RangeOrder},
	types::IndexRange,
};
use itertools::Itertools;

/// Collapses indices into sorted, contiguous, non-overlapping ranges.
///
/// `{7, 5, 6, 10, 6}` becomes `[5,7]` and `[10,10]`.
pub fn collapse_runs(indices: impl IntoIterator<Item = u8>) -> Vec<IndexRange> {
	let mut runs: Vec<IndexRange> = Vec::new();
	for index in indices.into_iter().sorted_unstable().dedup() {
		match runs.last_mut() {
			Some(run) if run.end.checked_add(1) == Some(index) => run.end = index,
			_ => runs.push(IndexRange::point(index)),
		}
	}
	runs
}

/// Index ranges that metatiles refer to but no tile reference covers.
#[derive(Clone)]
pub struct AbsentRanges {
	ranges: OrderedRangeStore<IndexRange, RangeOrder>,
}

impl AbsentRanges {
	pub fn new() -> Self {
		Self {
			ranges: OrderedRangeStore::new(RangeOrder::default()),
		}
	}

	pub fn insert(&mut self, range: IndexRange) {
		self.ranges.insert(range);
	}

	/// Records unresolved indices, merging them with the recorded ones into collapsed runs.
	pub fn record(&mut self, indices: impl IntoIterator<Item = u8>) {
		let fresh: Vec<u8> = indices.into_iter().filter(|&i| !self.contains(i)).collect();
		if fresh.is_empty() {
			return;
		}

		let known = self.ranges.iter().flat_map(|range| range.start..=range.end);
		let runs = collapse_runs(known.chain(fresh).collect::<Vec<u8>>());

		// the tree has no removal, so the merged runs go into a fresh one
		self.ranges = OrderedRangeStore::new(*self.ranges.comparator());
		for run in runs {
			self.insert(run);
		}
	}

	pub fn contains(&self, index: u8) -> bool {
		self.ranges.contains(&IndexRange::point(index))
	}

	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &IndexRange> {
		self.ranges.iter()
	}

	/// Total number of absent indices.
	pub fn count_indices(&self) -> usize {
		self.ranges.iter().map(IndexRange::len).sum()
	}
}

impl Default for AbsentRanges {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for AbsentRanges {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.ranges.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn r(start: u8, end: u8) -> IndexRange {
		IndexRange { start, end }
	}

	#[rstest]
	#[case(vec![5, 6, 7, 10], vec![r(5, 7), r(10, 10)])]
	#[case(vec![10, 7, 6, 5, 6, 10], vec![r(5, 7), r(10, 10)])]
	#[case(vec![], vec![])]
	#[case(vec![0, 255], vec![r(0, 0), r(255, 255)])]
	#[case(vec![254, 255, 253], vec![r(253, 255)])]
	#[case((0..=255).collect(), vec![r(0, 255)])]
	fn collapse(#[case] indices: Vec<u8>, #[case] expected: Vec<IndexRange>) {
		assert_eq!(collapse_runs(indices), expected);
	}

	#[test]
	fn record_and_query() {
		let mut absent = AbsentRanges::new();
		absent.record([10, 5, 6, 7]);
		assert_eq!(absent.iter().copied().collect::<Vec<_>>(), vec![r(5, 7), r(10, 10)]);
		assert!(absent.contains(6));
		assert!(!absent.contains(8));
		assert_eq!(absent.count_indices(), 4);

		// known indices are not registered twice, neighbours join the existing run
		absent.record([6, 7, 8]);
		assert_eq!(absent.iter().copied().collect::<Vec<_>>(), vec![r(5, 8), r(10, 10)]);
		assert_eq!(absent.len(), 2);
		assert_eq!(absent.count_indices(), 5);
	}

	#[rstest]
	#[case(vec![vec![5, 6, 7], vec![8]], vec![r(5, 8)])]
	#[case(vec![vec![8], vec![5, 6, 7]], vec![r(5, 8)])]
	#[case(vec![vec![1], vec![3], vec![2]], vec![r(1, 3)])]
	#[case(vec![vec![1, 2], vec![4, 5], vec![7]], vec![r(1, 2), r(4, 5), r(7, 7)])]
	#[case(vec![vec![254], vec![255], vec![0]], vec![r(0, 0), r(254, 255)])]
	fn repeated_records_merge_adjacent_runs(#[case] batches: Vec<Vec<u8>>, #[case] expected: Vec<IndexRange>) {
		let mut absent = AbsentRanges::new();
		for batch in batches {
			absent.record(batch);
		}
		assert_eq!(absent.iter().copied().collect::<Vec<_>>(), expected);
	}

	#[test]
	fn inserted_ranges_merge_with_recorded_indices() {
		let mut absent = AbsentRanges::new();
		absent.insert(r(0x41, 0x43));
		absent.record([0x44, 0x40]);
		assert_eq!(absent.iter().copied().collect::<Vec<_>>(), vec![r(0x40, 0x44)]);
	}
}
