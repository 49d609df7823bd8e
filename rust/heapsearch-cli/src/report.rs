use itertools::Itertools;
use serde::Serialize;

use heapsearch_core::{Path, SearchResult, StopReason};

use crate::query::{Algorithm, Query};

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub algorithm: Algorithm,
    pub start: &'a str,
    pub goal: &'a str,
    pub found: bool,
    pub path: Option<&'a Path<String>>,
    pub cost: Option<f64>,
    pub expanded: u64,
    pub generated: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<StopReason>,
}

impl<'a> Report<'a> {
    pub fn new(query: &'a Query, result: &'a SearchResult<String, f64>) -> Self {
        Self {
            algorithm: query.algorithm,
            start: &query.start,
            goal: &query.goal,
            found: result.found(),
            path: result.path.as_ref(),
            cost: result.cost,
            expanded: result.expanded,
            generated: result.generated,
            reason: result.reason,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut out = match self.path {
            Some(path) => format!("path: {}\n", path.iter().join(" -> ")),
            None => {
                let why = match self.reason {
                    Some(StopReason::ExpansionLimit) => "expansion limit reached",
                    _ => "goal unreachable",
                };
                format!("no path from {} to {}: {why}\n", self.start, self.goal)
            }
        };
        if let Some(cost) = self.cost {
            out.push_str(&format!("cost: {cost}\n"));
        }
        out.push_str(&format!("expanded: {} generated: {}\n", self.expanded, self.generated));
        out
    }
}
