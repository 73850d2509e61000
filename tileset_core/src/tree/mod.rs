//! An ordered container keyed by a comparator over index ranges.
//!
//! [`OrderedRangeStore`] is a red-black tree stored in an arena. It supports insertion,
//! lookup of a value that compares equal to a probe (for index ranges: the registered range
//! that contains a point probe) and in-order iteration. There is no removal; the stores are
//! filled once while a tileset is read and discarded afterwards.
//!
//! # Examples
//!
//! ```rust
//! use tileset_core::{tree::{OrderedRangeStore, RangeOrder}, types::IndexRange};
//!
//! let mut store = OrderedRangeStore::new(RangeOrder::default());
//! store.insert(IndexRange::new(0x10, 0x1f).unwrap());
//! store.insert(IndexRange::new(0x00, 0x03).unwrap());
//!
//! assert_eq!(store.find(&IndexRange::point(0x12)), Some(&IndexRange::new(0x10, 0x1f).unwrap()));
//! assert!(!store.contains(&IndexRange::point(0x05)));
//! assert_eq!(store.iter().map(|r| r.start).collect::<Vec<_>>(), vec![0x00, 0x10]);
//! ```

mod comparator;
mod iter;
mod store;

pub use comparator::{Comparator, RangeOrder, Ranged};
pub use iter::Iter;
pub use store::OrderedRangeStore;
