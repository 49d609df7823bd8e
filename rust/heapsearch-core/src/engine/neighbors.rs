use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::heuristics::EdgeCost;
use crate::numeric::Numeric;

/// Neighbour enumeration: `visit` reports every successor of `node` through
/// `emit`, synchronously and before returning.
pub trait Neighbors<N> {
    fn visit(&self, node: &N, emit: &mut dyn FnMut(N));
}

impl<N, F> Neighbors<N> for F
where
    F: Fn(&N, &mut dyn FnMut(N)),
{
    fn visit(&self, node: &N, emit: &mut dyn FnMut(N)) {
        self(node, emit)
    }
}

/// Directed weighted graph keyed by node value.
///
/// Successors are reported in edge insertion order. Parallel edges keep the
/// cheapest weight for [`EdgeCost`].
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<N, P> {
    adjacency: FxHashMap<N, Vec<N>>,
    weights: FxHashMap<(N, N), P>,
    edges: usize,
}

impl<N, P> Default for AdjacencyGraph<N, P> {
    fn default() -> Self {
        Self { adjacency: FxHashMap::default(), weights: FxHashMap::default(), edges: 0 }
    }
}

impl<N, P> AdjacencyGraph<N, P>
where
    N: Clone + Eq + Hash,
    P: Numeric,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with no outgoing edges (a no-op if present).
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    pub fn add_edge(&mut self, from: N, to: N, cost: P) {
        self.add_node(to.clone());
        self.adjacency.entry(from.clone()).or_default().push(to.clone());
        self.weights
            .entry((from, to))
            .and_modify(|w| {
                if cost < *w {
                    *w = cost;
                }
            })
            .or_insert(cost);
        self.edges += 1;
    }

    pub fn add_undirected_edge(&mut self, a: N, b: N, cost: P) {
        self.add_edge(a.clone(), b.clone(), cost);
        self.add_edge(b, a, cost);
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn edge_cost(&self, from: &N, to: &N) -> Option<P> {
        self.weights.get(&(from.clone(), to.clone())).copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

impl<N, P> Neighbors<N> for AdjacencyGraph<N, P>
where
    N: Clone + Eq + Hash,
{
    fn visit(&self, node: &N, emit: &mut dyn FnMut(N)) {
        if let Some(next) = self.adjacency.get(node) {
            for n in next {
                emit(n.clone());
            }
        }
    }
}

/// Weight of the stored edge; pairs the graph never connects cost zero,
/// which cannot happen when the graph is also the neighbour source.
impl<N, P> EdgeCost<N, P> for AdjacencyGraph<N, P>
where
    N: Clone + Eq + Hash,
    P: Numeric,
{
    fn cost(&self, current: &N, neighbor: &N) -> P {
        self.edge_cost(current, neighbor).unwrap_or_else(P::zero)
    }
}
