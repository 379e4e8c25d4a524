//! Error types for the search engine

use thiserror::Error;

use crate::state::AgentIndex;

/// Errors returned by a search.
///
/// The engine is a pure computation, so none of these are transient: they either mean the
/// caller broke the contract of [`choose_action`](crate::search::AdversarialSearch::choose_action)
/// or the game oracle contradicted itself.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("the game reports no agents")]
    NoAgents,

    #[error("the protagonist has no legal actions")]
    NoLegalActions,

    #[error("invalid search depth {max_depth}: at least one ply is required")]
    InvalidDepth { max_depth: u32 },

    #[error("{max_depth} plies with {num_agents} agents need {required} nested calls, limit is {limit}")]
    DepthExceedsRecursionLimit {
        max_depth: u32,
        num_agents: usize,
        required: usize,
        limit: usize,
    },

    #[error("the state is terminal but agent {agent} still has {actions} legal actions")]
    TerminalStateHasActions { agent: AgentIndex, actions: usize },

    #[error("the state reports both a win and a loss")]
    ConflictingOutcome,

    #[error("no successor for legal action {action} of agent {agent}")]
    IllegalSuccessor { agent: AgentIndex, action: String },

    #[error("unknown search strategy '{0}' (expected minimax, alpha-beta or expectimax)")]
    UnknownStrategy(String),

    #[error("a node {generation} generations below the root is worth NaN")]
    NotANumber { generation: usize },
}

impl SearchError {
    /// Returns `true` if the caller broke the contract of the search: bad configuration, a
    /// root state where the protagonist cannot move, or an evaluation function that produced
    /// NaN.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            SearchError::NoAgents
                | SearchError::NoLegalActions
                | SearchError::InvalidDepth { .. }
                | SearchError::DepthExceedsRecursionLimit { .. }
                | SearchError::UnknownStrategy(_)
                | SearchError::NotANumber { .. }
        )
    }

    /// Returns `true` if the game oracle gave answers that contradict each other.
    pub fn is_oracle_inconsistency(&self) -> bool {
        matches!(
            self,
            SearchError::TerminalStateHasActions { .. }
                | SearchError::ConflictingOutcome
                | SearchError::IllegalSuccessor { .. }
        )
    }
}
