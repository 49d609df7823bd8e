use anyhow::{ensure, Result};
use clap::ValueEnum;
use serde::Serialize;

use heapsearch_core::{AStar, GoalValue, Greedy, SearchOptions, SearchResult};

use crate::graph_file::LoadedGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// A*: optimal for admissible heuristics.
    Astar,
    /// Greedy best-first: follows the heuristic only.
    Greedy,
}

/// Expansion cutoff applied unless the caller picks another. Graphs without
/// a closed list can cycle forever on unreachable goals.
pub const DEFAULT_MAX_EXPANSIONS: u64 = 1_000_000;

#[derive(Clone, Debug)]
pub struct Query {
    pub algorithm: Algorithm,
    pub start: String,
    pub goal: String,
    pub options: SearchOptions,
}

impl Query {
    /// A query bounded by [`DEFAULT_MAX_EXPANSIONS`].
    pub fn new(algorithm: Algorithm, start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            algorithm,
            start: start.into(),
            goal: goal.into(),
            options: SearchOptions::default().with_max_expansions(DEFAULT_MAX_EXPANSIONS),
        }
    }

    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.options.max_expansions = Some(limit);
        self
    }
}

/// Run `query` over a loaded graph. Both endpoints must be declared nodes.
pub fn run_query(loaded: &LoadedGraph, query: &Query) -> Result<SearchResult<String, f64>> {
    ensure!(loaded.contains(&query.start), "start node {:?} is not in the graph", query.start);
    ensure!(loaded.contains(&query.goal), "goal node {:?} is not in the graph", query.goal);

    let heuristic = |n: &String| loaded.estimate(n);
    let goal = GoalValue::new(query.goal.clone());
    let result = match query.algorithm {
        Algorithm::Astar => AStar::new(&loaded.graph, &heuristic, &loaded.graph)
            .with_options(query.options.clone())
            .find_path(query.start.clone(), &goal)?,
        Algorithm::Greedy => Greedy::new(&loaded.graph, &heuristic)
            .with_options(query.options.clone())
            .find_path(query.start.clone(), &goal)?,
    };
    Ok(result)
}
