use crate::state::{AgentIndex, PROTAGONIST};

/// Position of a search node in the round-robin move order.
///
/// A round (ply) is complete once every agent has moved once. The root is the protagonist's
/// turn with no completed rounds; each successor generation advances the mover by one, and
/// wrapping back to the protagonist completes a round.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct PlyCursor {
    agent: AgentIndex,
    rounds_completed: u32,
}

impl PlyCursor {
    /// The cursor of the root node: the protagonist is about to move.
    pub const fn root() -> Self {
        Self {
            agent: PROTAGONIST,
            rounds_completed: 0,
        }
    }

    /// The agent moving at this node.
    pub fn agent(&self) -> AgentIndex {
        self.agent
    }

    /// Number of full rounds played between the root and this node.
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Returns the cursor of a child node, after the current agent has moved.
    pub fn step(self, num_agents: usize) -> Self {
        let next = self.agent + 1;
        if next >= num_agents {
            Self {
                agent: PROTAGONIST,
                rounds_completed: self.rounds_completed + 1,
            }
        } else {
            Self {
                agent: next,
                rounds_completed: self.rounds_completed,
            }
        }
    }

    /// Returns `true` once `max_depth` full rounds have been played, meaning the node must be
    /// scored by the evaluation function instead of expanded.
    pub fn is_exhausted(&self, max_depth: u32) -> bool {
        self.rounds_completed >= max_depth
    }

    /// Number of successor generations between the root and this node.
    pub fn generations(&self, num_agents: usize) -> usize {
        self.rounds_completed as usize * num_agents + self.agent
    }
}

impl Default for PlyCursor {
    fn default() -> Self {
        Self::root()
    }
}
