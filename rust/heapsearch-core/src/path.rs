//! Search-node arena and start-to-goal path reconstruction.
//!
//! Search nodes form a tree through `previous` handles: several nodes may
//! share an ancestor and the same value may appear more than once, since the
//! engine keeps no closed set. Nodes are appended once and never mutated.

use serde::{Deserialize, Serialize};

/// Stable index of a node inside a [`NodeArena`].
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeHandle(usize);

impl NodeHandle {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Shape shared by the A* and greedy search nodes.
pub trait Linked {
    type Value;

    fn previous(&self) -> Option<NodeHandle>;
    fn value(&self) -> &Self::Value;
}

/// A* search node: `priority` is `f = g + h`, `cost` is `g`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AStarNode<N, P> {
    pub previous: Option<NodeHandle>,
    pub value: N,
    pub priority: P,
    pub cost: P,
}

/// Greedy search node: `priority` is the heuristic alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GreedyNode<N, P> {
    pub previous: Option<NodeHandle>,
    pub value: N,
    pub priority: P,
}

impl<N, P> Linked for AStarNode<N, P> {
    type Value = N;

    fn previous(&self) -> Option<NodeHandle> {
        self.previous
    }

    fn value(&self) -> &N {
        &self.value
    }
}

impl<N, P> Linked for GreedyNode<N, P> {
    type Value = N;

    fn previous(&self) -> Option<NodeHandle> {
        self.previous
    }

    fn value(&self) -> &N {
        &self.value
    }
}

/// Append-only storage for search nodes, addressed by [`NodeHandle`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeArena<R> {
    nodes: Vec<R>,
}

impl<R> Default for NodeArena<R> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<R> NodeArena<R> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    /// Store a node and return its handle.
    pub fn alloc(&mut self, node: R) -> NodeHandle {
        self.nodes.push(node);
        NodeHandle(self.nodes.len() - 1)
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&R> {
        self.nodes.get(handle.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<R> std::ops::Index<NodeHandle> for NodeArena<R> {
    type Output = R;

    fn index(&self, handle: NodeHandle) -> &R {
        &self.nodes[handle.index()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PathNode<N> {
    value: N,
    next: Option<usize>,
}

/// Start-to-goal sequence of node values, stored as a forward-linked list.
///
/// Iteration always replays from the stored head, so a path can be walked
/// any number of times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<N> {
    nodes: Vec<PathNode<N>>,
    head: Option<usize>,
}

impl<N> Path<N> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> PathIter<'_, N> {
        PathIter { nodes: &self.nodes, cursor: self.head }
    }

    pub fn first(&self) -> Option<&N> {
        self.head.map(|i| &self.nodes[i].value)
    }

    pub fn last(&self) -> Option<&N> {
        self.iter().last()
    }

    pub fn to_vec(&self) -> Vec<N>
    where
        N: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consume the path into its values, start first.
    pub fn into_vec(self) -> Vec<N> {
        // Nodes are linked in storage order by construction.
        self.nodes.into_iter().map(|n| n.value).collect()
    }
}

impl<N> FromIterator<N> for Path<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut nodes: Vec<PathNode<N>> =
            iter.into_iter().map(|value| PathNode { value, next: None }).collect();
        let len = nodes.len();
        for (i, node) in nodes.iter_mut().enumerate() {
            if i + 1 < len {
                node.next = Some(i + 1);
            }
        }
        let head = if len == 0 { None } else { Some(0) };
        Path { nodes, head }
    }
}

pub struct PathIter<'a, N> {
    nodes: &'a [PathNode<N>],
    cursor: Option<usize>,
}

impl<'a, N> Iterator for PathIter<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<&'a N> {
        let node = &self.nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = PathIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Serialize> Serialize for Path<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Rebuild the start-to-goal path ending at `terminal`.
///
/// Walks `previous` handles back to the root, then reverses, so the cost is
/// linear in path length with no recursion.
pub fn build_path<R>(arena: &NodeArena<R>, terminal: NodeHandle) -> Path<R::Value>
where
    R: Linked,
    R::Value: Clone,
{
    let mut values = Vec::new();
    let mut cursor = Some(terminal);
    while let Some(handle) = cursor {
        let node = &arena[handle];
        values.push(node.value().clone());
        cursor = node.previous();
    }
    values.reverse();
    values.into_iter().collect()
}
