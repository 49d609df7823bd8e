use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

/// Fringe slots reserved up front before the queue starts doubling.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Stop after this many dequeues. `None` runs until the goal is found or
    /// the fringe is exhausted.
    pub max_expansions: Option<u64>,
    pub initial_capacity: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_expansions: None, initial_capacity: DEFAULT_INITIAL_CAPACITY }
    }
}

impl SearchOptions {
    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Reject settings under which a search cannot make progress.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidArgument("max_expansions must be at least 1".into()));
        }
        if self.initial_capacity == 0 {
            return Err(SearchError::InvalidArgument("initial_capacity must be at least 1".into()));
        }
        Ok(())
    }
}
