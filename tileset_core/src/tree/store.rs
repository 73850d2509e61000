use super::{Comparator, Iter};

pub(super) type NodeId = usize;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum NodeColor {
	Red,
	Black,
}

#[derive(Clone, Debug)]
pub(super) struct Node<T> {
	pub(super) value: T,
	pub(super) color: NodeColor,
	pub(super) parent: Option<NodeId>,
	pub(super) left: Option<NodeId>,
	pub(super) right: Option<NodeId>,
}

/// An append-only red-black tree ordered by an injected [`Comparator`].
///
/// Nodes live in an arena and link to each other by index, including a back link to the
/// parent, so in-order iteration needs neither recursion nor an explicit stack.
///
/// Inserting a value that compares equal to an existing one is accepted; which of the
/// equal values a lookup returns then depends on the shape of the tree.
///
/// The store is not synchronised. Sharing it between threads requires external locking.
#[derive(Clone)]
pub struct OrderedRangeStore<T, C> {
	pub(super) nodes: Vec<Node<T>>,
	pub(super) root: Option<NodeId>,
	comparator: C,
}

impl<T, C: Comparator<T>> OrderedRangeStore<T, C> {
	pub fn new(comparator: C) -> Self {
		Self {
			nodes: Vec::new(),
			root: None,
			comparator,
		}
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn comparator(&self) -> &C {
		&self.comparator
	}

	pub fn insert(&mut self, value: T) {
		let parent = self.insertion_parent(&value);
		let id = self.nodes.len();
		let goes_left = parent.is_some_and(|p| self.comparator.less(&value, &self.nodes[p].value));

		self.nodes.push(Node {
			value,
			color: NodeColor::Red,
			parent,
			left: None,
			right: None,
		});

		match parent {
			None => self.root = Some(id),
			Some(p) if goes_left => self.nodes[p].left = Some(id),
			Some(p) => self.nodes[p].right = Some(id),
		}

		self.fix_insert(id);
	}

	/// Returns a stored value that neither precedes nor follows `probe`.
	pub fn find(&self, probe: &T) -> Option<&T> {
		let mut current = self.root;
		while let Some(id) = current {
			let node = &self.nodes[id];
			current = if self.comparator.less(probe, &node.value) {
				node.left
			} else if self.comparator.less(&node.value, probe) {
				node.right
			} else {
				return Some(&node.value);
			};
		}
		None
	}

	pub fn contains(&self, probe: &T) -> bool {
		self.find(probe).is_some()
	}

	/// Iterates all values in ascending order.
	pub fn iter(&self) -> Iter<'_, T, C> {
		Iter::new(self, self.leftmost())
	}

	fn leftmost(&self) -> Option<NodeId> {
		let mut id = self.root?;
		while let Some(left) = self.nodes[id].left {
			id = left;
		}
		Some(id)
	}

	/// In-order successor, following parent links upwards when there is no right subtree.
	pub(super) fn successor(&self, id: NodeId) -> Option<NodeId> {
		if let Some(mut next) = self.nodes[id].right {
			while let Some(left) = self.nodes[next].left {
				next = left;
			}
			return Some(next);
		}

		let mut child = id;
		let mut parent = self.nodes[id].parent;
		while let Some(p) = parent {
			if self.nodes[p].right != Some(child) {
				break;
			}
			child = p;
			parent = self.nodes[p].parent;
		}
		parent
	}

	fn insertion_parent(&self, value: &T) -> Option<NodeId> {
		let mut parent = None;
		let mut current = self.root;
		while let Some(id) = current {
			parent = Some(id);
			current = if self.comparator.less(value, &self.nodes[id].value) {
				self.nodes[id].left
			} else {
				self.nodes[id].right
			};
		}
		parent
	}

	fn is_red(&self, id: Option<NodeId>) -> bool {
		id.is_some_and(|id| self.nodes[id].color == NodeColor::Red)
	}

	fn fix_insert(&mut self, mut node: NodeId) {
		while let Some(parent) = self.nodes[node].parent {
			if self.nodes[parent].color == NodeColor::Black {
				break;
			}
			// a red parent is never the root, so the grandparent exists
			let Some(grandparent) = self.nodes[parent].parent else {
				break;
			};

			let parent_is_left = self.nodes[grandparent].left == Some(parent);
			let uncle = if parent_is_left {
				self.nodes[grandparent].right
			} else {
				self.nodes[grandparent].left
			};

			if let Some(uncle) = uncle.filter(|&u| self.is_red(Some(u))) {
				self.nodes[parent].color = NodeColor::Black;
				self.nodes[uncle].color = NodeColor::Black;
				self.nodes[grandparent].color = NodeColor::Red;
				node = grandparent;
				continue;
			}

			let mut parent = parent;
			if parent_is_left && self.nodes[parent].right == Some(node) {
				self.rotate_left(parent);
				(node, parent) = (parent, node);
			} else if !parent_is_left && self.nodes[parent].left == Some(node) {
				self.rotate_right(parent);
				(node, parent) = (parent, node);
			}

			self.nodes[parent].color = NodeColor::Black;
			self.nodes[grandparent].color = NodeColor::Red;
			if parent_is_left {
				self.rotate_right(grandparent);
			} else {
				self.rotate_left(grandparent);
			}
		}

		if let Some(root) = self.root {
			self.nodes[root].color = NodeColor::Black;
		}
	}

	fn rotate_left(&mut self, x: NodeId) {
		let Some(y) = self.nodes[x].right else {
			return;
		};
		let inner = self.nodes[y].left;
		self.nodes[x].right = inner;
		if let Some(inner) = inner {
			self.nodes[inner].parent = Some(x);
		}
		self.nodes[y].left = Some(x);
		self.replace_in_parent(x, y);
	}

	fn rotate_right(&mut self, x: NodeId) {
		let Some(y) = self.nodes[x].left else {
			return;
		};
		let inner = self.nodes[y].right;
		self.nodes[x].left = inner;
		if let Some(inner) = inner {
			self.nodes[inner].parent = Some(x);
		}
		self.nodes[y].right = Some(x);
		self.replace_in_parent(x, y);
	}

	/// Puts `y` where `x` hung and makes `y` the parent of `x`.
	fn replace_in_parent(&mut self, x: NodeId, y: NodeId) {
		let parent = self.nodes[x].parent;
		self.nodes[y].parent = parent;
		match parent {
			None => self.root = Some(y),
			Some(p) if self.nodes[p].left == Some(x) => self.nodes[p].left = Some(y),
			Some(p) => self.nodes[p].right = Some(y),
		}
		self.nodes[x].parent = Some(y);
	}
}

impl<T: std::fmt::Debug, C: Comparator<T>> std::fmt::Debug for OrderedRangeStore<T, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}
