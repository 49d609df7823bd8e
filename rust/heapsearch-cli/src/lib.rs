pub mod config;
pub mod graph_file;
pub mod query;
pub mod report;

pub use config::{Config, LogFormat};
pub use graph_file::{load_graph, parse_graph, LoadedGraph};
pub use query::{run_query, Algorithm, Query, DEFAULT_MAX_EXPANSIONS};
pub use report::Report;
