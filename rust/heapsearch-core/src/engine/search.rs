use std::cmp::Ordering;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::heuristics::{EdgeCost, GoalTest, Heuristic};
use super::neighbors::Neighbors;
use crate::errors::SearchError;
use crate::numeric::Numeric;
use crate::options::SearchOptions;
use crate::path::{build_path, AStarNode, GreedyNode, Linked, NodeArena, NodeHandle, Path};
use crate::queue::{Compare, PriorityQueue, QueueOrder, MAX_PREALLOCATED_SLOTS};

/// Why a search ended without reaching the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopReason {
    /// Every reachable node was expanded; the goal is unreachable.
    Exhausted,
    /// `SearchOptions::max_expansions` dequeues happened first.
    ExpansionLimit,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult<N, P> {
    pub path: Option<Path<N>>,
    /// Accumulated edge cost of `path` (A* only).
    pub cost: Option<P>,
    pub expanded: u64,
    pub generated: u64,
    pub reason: Option<StopReason>,
}

impl<N, P> SearchResult<N, P> {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    pub fn into_path(self) -> Option<Path<N>> {
        self.path
    }

    fn stopped(reason: StopReason, expanded: u64, generated: u64) -> Self {
        Self { path: None, cost: None, expanded, generated, reason: Some(reason) }
    }
}

#[derive(Clone, Copy, Debug)]
struct FringeEntry<P> {
    handle: NodeHandle,
    priority: P,
    seq: u64,
}

/// Priority, then insertion order. Used with `QueueOrder::LowestFirst`, so
/// the lowest priority leaves first and ties leave first-in-first-out.
#[derive(Clone, Copy, Debug, Default)]
struct ByPriority;

impl<P: Numeric> Compare<FringeEntry<P>> for ByPriority {
    fn compare(&self, a: &FringeEntry<P>, b: &FringeEntry<P>) -> Ordering {
        Numeric::compare(&a.priority, &b.priority).then_with(|| a.seq.cmp(&b.seq))
    }
}

/// How a variant seeds the fringe and scores successors.
trait Expansion<N, P> {
    type Node: Linked<Value = N>;

    fn root(&self, start: N) -> Self::Node;
    fn successor(&self, parent: NodeHandle, current: &Self::Node, neighbor: N) -> Self::Node;
    fn priority(node: &Self::Node) -> P;
    fn path_cost(node: &Self::Node) -> Option<P>;
}

struct AStarExpansion<'a, H, C> {
    heuristic: &'a H,
    cost: &'a C,
}

impl<'a, N, P, H, C> Expansion<N, P> for AStarExpansion<'a, H, C>
where
    P: Numeric,
    H: Heuristic<N, P>,
    C: EdgeCost<N, P>,
{
    type Node = AStarNode<N, P>;

    fn root(&self, start: N) -> AStarNode<N, P> {
        AStarNode { previous: None, value: start, priority: P::zero(), cost: P::zero() }
    }

    fn successor(&self, parent: NodeHandle, current: &AStarNode<N, P>, neighbor: N) -> AStarNode<N, P> {
        let cost = current.cost + self.cost.cost(&current.value, &neighbor);
        let priority = self.heuristic.estimate(&neighbor) + cost;
        AStarNode { previous: Some(parent), value: neighbor, priority, cost }
    }

    fn priority(node: &AStarNode<N, P>) -> P {
        node.priority
    }

    fn path_cost(node: &AStarNode<N, P>) -> Option<P> {
        Some(node.cost)
    }
}

struct GreedyExpansion<'a, H> {
    heuristic: &'a H,
}

impl<'a, N, P, H> Expansion<N, P> for GreedyExpansion<'a, H>
where
    P: Numeric,
    H: Heuristic<N, P>,
{
    type Node = GreedyNode<N, P>;

    fn root(&self, start: N) -> GreedyNode<N, P> {
        GreedyNode { previous: None, value: start, priority: P::zero() }
    }

    fn successor(&self, parent: NodeHandle, _current: &GreedyNode<N, P>, neighbor: N) -> GreedyNode<N, P> {
        let priority = self.heuristic.estimate(&neighbor);
        GreedyNode { previous: Some(parent), value: neighbor, priority }
    }

    fn priority(node: &GreedyNode<N, P>) -> P {
        node.priority
    }

    fn path_cost(_node: &GreedyNode<N, P>) -> Option<P> {
        None
    }
}

/// Shared fringe loop. No closed set: a value reached along several routes
/// is enqueued (and possibly expanded) once per route.
fn run<N, P, X, G, Q>(
    algorithm: &'static str,
    expansion: &X,
    neighbors: &G,
    start: N,
    goal: &Q,
    options: &SearchOptions,
) -> Result<SearchResult<N, P>, SearchError>
where
    N: Clone,
    P: Numeric,
    X: Expansion<N, P>,
    G: Neighbors<N> + ?Sized,
    Q: GoalTest<N> + ?Sized,
{
    options.validate()?;
    let started = Instant::now();

    let mut fringe: PriorityQueue<FringeEntry<P>, ByPriority> = PriorityQueue::with_limits(
        ByPriority,
        QueueOrder::LowestFirst,
        options.initial_capacity,
        usize::MAX,
    )?;
    let mut arena: NodeArena<X::Node> =
        NodeArena::with_capacity(options.initial_capacity.min(MAX_PREALLOCATED_SLOTS));
    let mut seq: u64 = 0;
    let mut expanded: u64 = 0;
    let mut generated: u64 = 1;
    let mut successors: Vec<N> = Vec::new();

    let root = arena.alloc(expansion.root(start));
    fringe.enqueue(FringeEntry { handle: root, priority: P::zero(), seq })?;

    while !fringe.is_empty() {
        let entry = fringe.dequeue()?;
        expanded += 1;
        if options.max_expansions.map(|limit| expanded > limit).unwrap_or(false) {
            debug!(algorithm, expanded, generated, "search_expansion_limit");
            return Ok(SearchResult::stopped(StopReason::ExpansionLimit, expanded - 1, generated));
        }

        let current = &arena[entry.handle];
        trace!(algorithm, expanded, priority = ?entry.priority, "expand");
        if goal.is_goal(current.value()) {
            let cost = X::path_cost(current);
            let path = build_path(&arena, entry.handle);
            let duration_us = started.elapsed().as_micros() as u64;
            debug!(algorithm, found = true, expanded, generated, path_len = path.len(), duration_us, "search_done");
            return Ok(SearchResult { path: Some(path), cost, expanded, generated, reason: None });
        }

        successors.clear();
        neighbors.visit(current.value(), &mut |n| successors.push(n));
        for neighbor in successors.drain(..) {
            let child = expansion.successor(entry.handle, &arena[entry.handle], neighbor);
            let priority = X::priority(&child);
            let handle = arena.alloc(child);
            seq += 1;
            fringe.enqueue(FringeEntry { handle, priority, seq })?;
            generated += 1;
        }
    }

    let duration_us = started.elapsed().as_micros() as u64;
    debug!(algorithm, found = false, expanded, generated, duration_us, "search_done");
    Ok(SearchResult::stopped(StopReason::Exhausted, expanded, generated))
}

/// A* search: the fringe is ordered by `f = g + h`, lowest first.
///
/// Optimal for non-negative edge costs and an admissible heuristic. With no
/// closed set, zero- or negative-cost cycles can keep the fringe from ever
/// draining; set [`SearchOptions::max_expansions`] to bound such searches.
pub struct AStar<'a, G: ?Sized, H, C> {
    neighbors: &'a G,
    heuristic: &'a H,
    cost: &'a C,
    options: SearchOptions,
}

impl<'a, G: ?Sized, H, C> AStar<'a, G, H, C> {
    pub fn new(neighbors: &'a G, heuristic: &'a H, cost: &'a C) -> Self {
        Self { neighbors, heuristic, cost, options: SearchOptions::default() }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn find_path<N, P, Q>(&self, start: N, goal: &Q) -> Result<SearchResult<N, P>, SearchError>
    where
        N: Clone,
        P: Numeric,
        G: Neighbors<N>,
        H: Heuristic<N, P>,
        C: EdgeCost<N, P>,
        Q: GoalTest<N> + ?Sized,
    {
        let expansion = AStarExpansion { heuristic: self.heuristic, cost: self.cost };
        run("astar", &expansion, self.neighbors, start, goal, &self.options)
    }
}

/// Greedy best-first search: the fringe is ordered by the heuristic alone.
/// Usually expands fewer nodes than A*, but the path is not guaranteed optimal.
pub struct Greedy<'a, G: ?Sized, H> {
    neighbors: &'a G,
    heuristic: &'a H,
    options: SearchOptions,
}

impl<'a, G: ?Sized, H> Greedy<'a, G, H> {
    pub fn new(neighbors: &'a G, heuristic: &'a H) -> Self {
        Self { neighbors, heuristic, options: SearchOptions::default() }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn find_path<N, P, Q>(&self, start: N, goal: &Q) -> Result<SearchResult<N, P>, SearchError>
    where
        N: Clone,
        P: Numeric,
        G: Neighbors<N>,
        H: Heuristic<N, P>,
        Q: GoalTest<N> + ?Sized,
    {
        let expansion = GreedyExpansion { heuristic: self.heuristic };
        run("greedy", &expansion, self.neighbors, start, goal, &self.options)
    }
}
