use super::{Comparator, OrderedRangeStore, store::NodeId};
use std::iter::FusedIterator;

/// In-order iterator over an [`OrderedRangeStore`].
pub struct Iter<'a, T, C> {
	store: &'a OrderedRangeStore<T, C>,
	next: Option<NodeId>,
	remaining: usize,
}

impl<'a, T, C: Comparator<T>> Iter<'a, T, C> {
	pub(super) fn new(store: &'a OrderedRangeStore<T, C>, first: Option<NodeId>) -> Self {
		Self {
			store,
			next: first,
			remaining: store.len(),
		}
	}
}

impl<'a, T, C: Comparator<T>> Iterator for Iter<'a, T, C> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		let id = self.next?;
		self.next = self.store.successor(id);
		self.remaining = self.remaining.saturating_sub(1);
		Some(&self.store.nodes[id].value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T, C: Comparator<T>> ExactSizeIterator for Iter<'_, T, C> {}

impl<T, C: Comparator<T>> FusedIterator for Iter<'_, T, C> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a OrderedRangeStore<T, C> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T, C>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
