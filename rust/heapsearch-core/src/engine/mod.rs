pub mod api;
pub mod heuristics;
pub mod neighbors;
pub mod search;

pub use api::{astar, astar_to, astar_to_with, greedy, greedy_to, greedy_to_with};
pub use heuristics::{EdgeCost, GoalTest, GoalValue, Heuristic};
pub use neighbors::{AdjacencyGraph, Neighbors};
pub use search::{AStar, Greedy, SearchResult, StopReason};
