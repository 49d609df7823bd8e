use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use heapsearch_cli::{load_graph, run_query, Algorithm, Config, LogFormat, Query, Report, DEFAULT_MAX_EXPANSIONS};

#[derive(Parser, Debug)]
#[command(name = "heapsearch", version, about = "Run A* or greedy best-first search over a JSON graph file")]
struct Args {
    /// Graph file (nodes with heuristic estimates, weighted edges)
    #[arg(long = "graph", value_name = "PATH")]
    graph: PathBuf,

    /// Start node id
    #[arg(long = "start", value_name = "ID")]
    start: String,

    /// Goal node id
    #[arg(long = "goal", value_name = "ID")]
    goal: String,

    #[arg(long = "algorithm", value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,

    /// Stop after this many expansions
    #[arg(long = "max-expansions", value_name = "N", default_value_t = DEFAULT_MAX_EXPANSIONS)]
    max_expansions: u64,

    /// Print the report as JSON instead of text
    #[arg(long = "json")]
    json: bool,
}

impl Args {
    fn query(&self) -> Query {
        Query::new(self.algorithm, self.start.as_str(), self.goal.as_str()).with_max_expansions(self.max_expansions)
    }
}

fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    match cfg.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn main() -> Result<()> {
    let cfg = Config::from_env()?;
    init_tracing(&cfg);

    let args = Args::parse();
    info!(?args, core_version = %heapsearch_core::version(), "starting heapsearch");

    let loaded = load_graph(&args.graph)?;
    let query = args.query();
    let result = run_query(&loaded, &query).with_context(|| format!("search {} -> {}", query.start, query.goal))?;
    info!(found = result.found(), expanded = result.expanded, generated = result.generated, "search finished");

    let report = Report::new(&query, &result);
    if args.json {
        println!("{}", report.to_json().context("serialize report")?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
