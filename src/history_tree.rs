//! Rooted tree of visited URLs, each page hanging under the page it was
//! opened from.

/// Index of a node within its [`HistoryTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct HistoryNode {
	url: String,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
pub struct HistoryTree {
	nodes: Vec<HistoryNode>,
}

impl HistoryTree {
	pub fn new(root_url: impl Into<String>) -> Self {
		Self {
			nodes: vec![HistoryNode {
				url: root_url.into(),
				parent: None,
				children: Vec::new(),
			}],
		}
	}

	pub fn root(&self) -> NodeId {
		NodeId(0)
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Always `false`: the root is never removed.
	pub fn is_empty(&self) -> bool {
		false
	}

	pub fn url(&self, id: NodeId) -> &str {
		&self.nodes[id.0].url
	}

	pub fn parent(&self, id: NodeId) -> Option<NodeId> {
		self.nodes[id.0].parent
	}

	pub fn children(&self, id: NodeId) -> &[NodeId] {
		&self.nodes[id.0].children
	}

	/// First node with `url` in depth-first pre-order.
	pub fn find(&self, url: &str) -> Option<NodeId> {
		self.preorder().map(|(id, _)| id).find(|id| self.url(*id) == url)
	}

	/// Adds `url` as the last child of the first node matching `parent_url`.
	///
	/// Nothing is inserted when no node matches.
	pub fn insert(&mut self, url: impl Into<String>, parent_url: &str) -> Option<NodeId> {
		let parent = self.find(parent_url)?;
		let id = NodeId(self.nodes.len());
		self.nodes.push(HistoryNode {
			url: url.into(),
			parent: Some(parent),
			children: Vec::new(),
		});
		self.nodes[parent.0].children.push(id);
		Some(id)
	}

	/// `(depth, url)` for every node in pre-order, the root at depth 0.
	pub fn outline(&self) -> Vec<(usize, &str)> {
		self.preorder()
			.map(|(id, depth)| (depth, self.url(id)))
			.collect()
	}

	fn preorder(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
		let mut stack = vec![(self.root(), 0)];
		std::iter::from_fn(move || {
			let (id, depth) = stack.pop()?;
			stack.extend(self.children(id).iter().rev().map(|c| (*c, depth + 1)));
			Some((id, depth))
		})
	}
}
