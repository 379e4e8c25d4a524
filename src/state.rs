use std::fmt::Debug;

/// Index of an agent taking part in the game. Agents move in round-robin order by index.
pub type AgentIndex = usize;

/// The agent for whom the search picks an action. It is always the maximizer.
pub const PROTAGONIST: AgentIndex = 0;

/// The central trait of the library, the oracle through which the search engine sees a game.
///
/// The engine never looks inside a state. It only asks which actions an agent may take, what
/// state follows an action, how many agents are playing and whether the game is over. States are
/// treated as immutable values: every transition produces a new state.
pub trait GameState: Sized {
    /// The type representing an action. This could be a simple `u8` for a board position
    /// or a more complex struct for games with intricate actions.
    type Action: Clone + Debug;

    /// Returns the total number of agents, protagonist included. Must be at least 1 and must not
    /// change while a search is running.
    fn num_agents(&self) -> usize;

    /// Returns the legal actions of `agent` in this state, in a deterministic order.
    ///
    /// The list should only be empty for terminal states. The engine only asks a terminal state
    /// for its actions at the root, where any action is reported as an inconsistency; below the
    /// root a terminal state is scored without being asked, so its actions go unchecked.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// Returns the state reached after `agent` takes `action`.
    ///
    /// Returns `None` if the action cannot be applied. The engine only passes actions that
    /// [`legal_actions`](GameState::legal_actions) reported, so `None` means the oracle
    /// contradicts itself.
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Option<Self>;

    /// Returns `true` if the protagonist has won.
    fn is_win(&self) -> bool;

    /// Returns `true` if the protagonist has lost.
    fn is_lose(&self) -> bool;

    /// Returns `true` if the game is over. Games that can end in a draw should override this.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Returns the current outcome of the game from the protagonist's point of view.
    fn outcome(&self) -> GameOutcome {
        if self.is_win() {
            GameOutcome::Win
        } else if self.is_lose() {
            GameOutcome::Lose
        } else if self.is_terminal() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The protagonist has won.
    Win,
    /// The protagonist has lost.
    Lose,
    /// The game has ended without a winner.
    Draw,
}

impl GameOutcome {
    /// Returns `true` for every outcome except [`GameOutcome::InProgress`].
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}
