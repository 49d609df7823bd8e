//! JSON graph files.
//!
//! ```json
//! {
//!   "nodes": [{ "id": "a", "h": 2.0 }, { "id": "b" }],
//!   "edges": [{ "from": "a", "to": "b", "cost": 1.5, "undirected": true }]
//! }
//! ```
//!
//! `h` defaults to 0 and `undirected` to false.

use std::fs;
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use heapsearch_core::AdjacencyGraph;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<NodeSpec>,
    #[serde(default)]
    edges: Vec<EdgeSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSpec {
    id: String,
    #[serde(default)]
    h: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeSpec {
    from: String,
    to: String,
    cost: f64,
    #[serde(default)]
    undirected: bool,
}

/// A validated graph plus the per-node heuristic estimates.
#[derive(Clone, Debug)]
pub struct LoadedGraph {
    pub graph: AdjacencyGraph<String, f64>,
    heuristic: FxHashMap<String, f64>,
}

impl LoadedGraph {
    /// Heuristic estimate for `node`; 0 for nodes outside the file.
    pub fn estimate(&self, node: &String) -> f64 {
        self.heuristic.get(node).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.heuristic.contains_key(node)
    }
}

pub fn load_graph(path: &Path) -> Result<LoadedGraph> {
    let text = fs::read_to_string(path).with_context(|| format!("read graph file {}", path.display()))?;
    let loaded = parse_graph(&text).with_context(|| format!("load graph file {}", path.display()))?;
    debug!(
        path = %path.display(),
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        "graph_loaded"
    );
    Ok(loaded)
}

pub fn parse_graph(text: &str) -> Result<LoadedGraph> {
    let file: GraphFile = serde_json::from_str(text).context("parse graph json")?;

    let mut graph = AdjacencyGraph::new();
    let mut heuristic: FxHashMap<String, f64> = FxHashMap::default();
    for node in file.nodes {
        ensure!(
            node.h.is_finite() && node.h >= 0.0,
            "node {:?}: heuristic must be finite and non-negative, got {}",
            node.id,
            node.h
        );
        if heuristic.insert(node.id.clone(), node.h).is_some() {
            bail!("duplicate node id {:?}", node.id);
        }
        graph.add_node(node.id);
    }

    for (i, edge) in file.edges.into_iter().enumerate() {
        for end in [&edge.from, &edge.to] {
            if !heuristic.contains_key(end) {
                bail!("edge #{i} references unknown node {end:?}");
            }
        }
        ensure!(
            edge.cost.is_finite() && edge.cost >= 0.0,
            "edge #{i} {:?} -> {:?}: cost must be finite and non-negative, got {}",
            edge.from,
            edge.to,
            edge.cost
        );
        if edge.undirected {
            graph.add_undirected_edge(edge.from, edge.to, edge.cost);
        } else {
            graph.add_edge(edge.from, edge.to, edge.cost);
        }
    }

    Ok(LoadedGraph { graph, heuristic })
}
