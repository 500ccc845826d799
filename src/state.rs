//! Search-state primitives for the best-first solver.
//!
//! - [`SearchState`]: an `(index, remaining)` pair compared by value.
//! - [`Frontier`]: min-priority queue on `remaining`, backed by a binary heap.
//! - [`SearchTree`]: arena of discovered states with parent links, plus a
//!   value index used for deduplication.
//!
//! Parent links are arena indices, never references, so the tree owns every
//! state and lookups during reconstruction are plain slice accesses.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A node in the include/exclude decision tree.
///
/// `index` is the next unconsidered position in the sequence and
/// `remaining` the part of the target still to be covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub index: usize,
    pub remaining: i64,
}

impl SearchState {
    #[inline]
    pub fn new(index: usize, remaining: i64) -> Self {
        Self { index, remaining }
    }

    /// The root state for a target.
    #[inline]
    pub fn root(target: i64) -> Self {
        Self::new(0, target)
    }

    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.remaining == 0
    }
}

/// Handle to a state stored in a [`SearchTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    state: SearchState,
    node: NodeId,
}

// `BinaryHeap` is a max-heap, so the comparison is inverted on `remaining`.
// Among equal `remaining`, deeper states come out first.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .state
            .remaining
            .cmp(&self.state.remaining)
            .then_with(|| self.state.index.cmp(&other.state.index))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending states ordered by ascending `remaining`.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: SearchState, node: NodeId) {
        self.heap.push(FrontierEntry { state, node });
    }

    /// Extract the pending state with the smallest `remaining`.
    pub fn pop(&mut self) -> Option<(SearchState, NodeId)> {
        self.heap.pop().map(|e| (e.state, e.node))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[derive(Debug, Clone)]
struct TreeNode {
    state: SearchState,
    parent: Option<NodeId>,
}

/// Every state discovered during one search, rooted at `(0, target)`.
///
/// Each state appears at most once; the first path to reach it wins.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<TreeNode>,
    index: HashMap<SearchState, NodeId>,
}

impl SearchTree {
    /// Create a tree holding only `root`, which gets id 0.
    pub fn new(root: SearchState) -> Self {
        let mut index = HashMap::new();
        index.insert(root, 0);
        Self {
            nodes: vec![TreeNode {
                state: root,
                parent: None,
            }],
            index,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        0
    }

    /// Record `state` as a child of `parent`.
    ///
    /// Returns `None` if an equal state was already discovered, in which
    /// case the tree is left untouched.
    pub fn discover(&mut self, state: SearchState, parent: NodeId) -> Option<NodeId> {
        debug_assert!(parent < self.nodes.len(), "unknown parent node {parent}");
        if self.index.contains_key(&state) {
            return None;
        }
        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            state,
            parent: Some(parent),
        });
        self.index.insert(state, id);
        Some(id)
    }

    #[inline]
    pub fn contains(&self, state: &SearchState) -> bool {
        self.index.contains_key(state)
    }

    #[inline]
    pub fn state(&self, id: NodeId) -> SearchState {
        self.nodes[id].state
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` up to the root and collect the included values.
    ///
    /// Each step whose `remaining` dropped relative to its parent
    /// contributes the size of the drop. Values come out leaf first.
    pub fn path_values(&self, id: NodeId) -> Vec<i64> {
        let mut out = Vec::new();
        let mut cur = id;
        while let Some(parent) = self.parent(cur) {
            let taken = self.state(parent).remaining - self.state(cur).remaining;
            if taken > 0 {
                out.push(taken);
            }
            cur = parent;
        }
        out
    }
}
