pub mod bsearch;
pub mod engine;
pub mod errors;
pub mod numeric;
pub mod options;
pub mod path;
pub mod queue;

pub use bsearch::{binary_search_by, Probe};
pub use engine::{
    astar, astar_to, astar_to_with, greedy, greedy_to, greedy_to_with, AStar, AdjacencyGraph, EdgeCost,
    Greedy, GoalTest, GoalValue, Heuristic, Neighbors, SearchResult, StopReason,
};
pub use errors::{QueueError, SearchError};
pub use numeric::Numeric;
pub use options::SearchOptions;
pub use path::{build_path, NodeArena, NodeHandle, Path};
pub use queue::{Compare, Natural, PriorityQueue, QueueOrder, Reversed, MAX_PREALLOCATED_SLOTS};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
