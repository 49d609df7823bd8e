//! One-call entry points for the common goal shapes.
//!
//! Each returns the start-to-goal path, or `None` when the fringe drains
//! without reaching the goal. Use [`AStar`] / [`Greedy`] directly for
//! options and search counters.

use super::heuristics::{EdgeCost, GoalTest, GoalValue, Heuristic};
use super::neighbors::Neighbors;
use super::search::{AStar, Greedy};
use crate::errors::SearchError;
use crate::numeric::Numeric;
use crate::path::Path;

/// A* towards any node satisfying `goal`.
pub fn astar<N, P, G, H, C, Q>(
    start: N,
    neighbors: &G,
    heuristic: &H,
    cost: &C,
    goal: &Q,
) -> Result<Option<Path<N>>, SearchError>
where
    N: Clone,
    P: Numeric,
    G: Neighbors<N> + ?Sized,
    H: Heuristic<N, P>,
    C: EdgeCost<N, P>,
    Q: GoalTest<N> + ?Sized,
{
    Ok(AStar::new(neighbors, heuristic, cost).find_path(start, goal)?.into_path())
}

/// A* towards `goal`, matched with `PartialEq`.
pub fn astar_to<N, P, G, H, C>(
    start: N,
    neighbors: &G,
    heuristic: &H,
    cost: &C,
    goal: N,
) -> Result<Option<Path<N>>, SearchError>
where
    N: Clone + PartialEq,
    P: Numeric,
    G: Neighbors<N> + ?Sized,
    H: Heuristic<N, P>,
    C: EdgeCost<N, P>,
{
    astar(start, neighbors, heuristic, cost, &GoalValue::new(goal))
}

/// A* towards `goal`, matched with `equate`.
pub fn astar_to_with<N, P, G, H, C, E>(
    start: N,
    neighbors: &G,
    heuristic: &H,
    cost: &C,
    goal: N,
    equate: E,
) -> Result<Option<Path<N>>, SearchError>
where
    N: Clone,
    P: Numeric,
    G: Neighbors<N> + ?Sized,
    H: Heuristic<N, P>,
    C: EdgeCost<N, P>,
    E: Fn(&N, &N) -> bool,
{
    astar(start, neighbors, heuristic, cost, &GoalValue::with_equality(goal, equate))
}

/// Greedy best-first towards any node satisfying `goal`.
pub fn greedy<N, P, G, H, Q>(
    start: N,
    neighbors: &G,
    heuristic: &H,
    goal: &Q,
) -> Result<Option<Path<N>>, SearchError>
where
    N: Clone,
    P: Numeric,
    G: Neighbors<N> + ?Sized,
    H: Heuristic<N, P>,
    Q: GoalTest<N> + ?Sized,
{
    Ok(Greedy::new(neighbors, heuristic).find_path(start, goal)?.into_path())
}

pub fn greedy_to<N, P, G, H>(
    start: N,
    neighbors: &G,
    heuristic: &H,
    goal: N,
) -> Result<Option<Path<N>>, SearchError>
where
    N: Clone + PartialEq,
    P: Numeric,
    G: Neighbors<N> + ?Sized,
    H: Heuristic<N, P>,
{
    greedy(start, neighbors, heuristic, &GoalValue::new(goal))
}

pub fn greedy_to_with<N, P, G, H, E>(
    start: N,
    neighbors: &G,
    heuristic: &H,
    goal: N,
    equate: E,
) -> Result<Option<Path<N>>, SearchError>
where
    N: Clone,
    P: Numeric,
    G: Neighbors<N> + ?Sized,
    H: Heuristic<N, P>,
    E: Fn(&N, &N) -> bool,
{
    greedy(start, neighbors, heuristic, &GoalValue::with_equality(goal, equate))
}
