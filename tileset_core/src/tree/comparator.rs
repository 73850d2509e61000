use crate::types::{IndexRange, TileRef};

/// Strict "less than" used to order an [`OrderedRangeStore`](super::OrderedRangeStore).
///
/// Two values for which neither is less than the other are treated as equal by lookups.
pub trait Comparator<T> {
	fn less(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T, F> Comparator<T> for F
where
	F: Fn(&T, &T) -> bool,
{
	fn less(&self, lhs: &T, rhs: &T) -> bool {
		self(lhs, rhs)
	}
}

/// Values that occupy an index range.
pub trait Ranged {
	fn index_range(&self) -> IndexRange;
}

impl Ranged for IndexRange {
	fn index_range(&self) -> IndexRange {
		*self
	}
}

impl Ranged for TileRef {
	fn index_range(&self) -> IndexRange {
		self.range
	}
}

/// Orderings over index ranges.
///
/// Both treat a point probe inside a registered range as equal to that range, which is what
/// makes point lookups work. Both also require registered ranges to be disjoint.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RangeOrder {
	/// `lhs` lies entirely before `rhs`: `lhs.end < rhs.start`.
	#[default]
	Disjoint,
	/// `lhs.start < rhs.start && lhs.end < rhs.end`, the ordering older tileset files were indexed with.
	/// It is only a partial order; partially overlapping ranges compare in both directions.
	BothEndpoints,
}

impl<T: Ranged> Comparator<T> for RangeOrder {
	fn less(&self, lhs: &T, rhs: &T) -> bool {
		let (lhs, rhs) = (lhs.index_range(), rhs.index_range());
		match self {
			RangeOrder::Disjoint => lhs.end < rhs.start,
			RangeOrder::BothEndpoints => lhs.start < rhs.start && lhs.end < rhs.end,
		}
	}
}
