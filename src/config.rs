//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::strategy::Strategy;

/// Default number of plies to search.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Default bound on nested value computations, i.e. on `max_depth * num_agents`.
///
/// Sized so that a search at the limit fits the 2 MiB stack of a spawned thread in an
/// unoptimized build, with room left for the caller's own frames and a game's own state.
pub const DEFAULT_RECURSION_LIMIT: usize = 512;

/// Configuration for one or more searches. Read-only while a search runs.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How adversary nodes are valued.
    pub strategy: Strategy,

    /// Number of plies (full rounds in which every agent moves once) searched before states
    /// are scored by the evaluation function.
    pub max_depth: u32,

    /// Largest `max_depth * num_agents` accepted. Searches deeper than this are rejected up
    /// front instead of risking stack exhaustion. Raise it only for searches run on a thread
    /// with a larger stack.
    pub recursion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Builder pattern: set the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder pattern: set the search depth in plies.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder pattern: set the recursion limit.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Checks that a game with `num_agents` agents can be searched with this configuration.
    pub fn validate(&self, num_agents: usize) -> Result<(), SearchError> {
        if num_agents == 0 {
            return Err(SearchError::NoAgents);
        }
        if self.max_depth == 0 {
            return Err(SearchError::InvalidDepth {
                max_depth: self.max_depth,
            });
        }

        let required = (self.max_depth as usize)
            .checked_mul(num_agents)
            .unwrap_or(usize::MAX);
        if required > self.recursion_limit {
            return Err(SearchError::DepthExceedsRecursionLimit {
                max_depth: self.max_depth,
                num_agents,
                required,
                limit: self.recursion_limit,
            });
        }
        Ok(())
    }
}
