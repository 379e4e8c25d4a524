use std::ops::ControlFlow;

use tracing::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::evaluation::Evaluator;
use crate::ply::PlyCursor;
use crate::random::{LastSeen, TieBreaker};
use crate::state::{AgentIndex, GameState, PROTAGONIST};
use crate::strategy::{Fold, NodeKind, Strategy, Window};

/// Counters collected during one search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose value was computed, the root and the leaves included.
    pub nodes_visited: u64,
    /// Calls made to the evaluation function.
    pub leaf_evaluations: u64,
    /// Nodes left early because the rest of their children could not change the decision.
    pub cutoffs: u64,
    /// Longest chain of successor generations explored from the root.
    pub max_generation: usize,
}

/// The result of a search.
#[derive(Debug, Clone)]
pub struct SearchOutcome<A> {
    /// The action chosen for the protagonist.
    pub action: A,
    /// The value of the chosen action.
    pub value: f64,
    /// Every root action with the value the search found for it, in the oracle's order.
    ///
    /// Under alpha-beta pruning only the best value is exact: an action refuted by an earlier
    /// sibling reports an upper bound on its value.
    pub action_values: Vec<(A, f64)>,
    /// Counters for this search.
    pub stats: SearchStats,
}

/// A depth-limited adversarial search for the protagonist (agent 0) of a game.
///
/// The protagonist maximizes the evaluation function. Adversaries move after it in index order
/// and are modelled by the configured [`Strategy`]: as minimizers, as minimizers searched with
/// alpha-beta pruning, or as uniformly random movers.
///
/// When several root actions share the best value, the last of them in the oracle's order is
/// chosen unless another [`TieBreaker`] is configured.
pub struct AdversarialSearch<E, K: TieBreaker = LastSeen> {
    config: SearchConfig,
    evaluator: E,
    tie_breaker: K,
}

/// A builder for creating instances of `AdversarialSearch`.
pub struct AdversarialSearchBuilder<E, K: TieBreaker> {
    config: SearchConfig,
    evaluator: E,
    tie_breaker: K,
}

impl<E> AdversarialSearchBuilder<E, LastSeen> {
    /// Creates a new builder with the given evaluation function and the default configuration.
    pub fn new(evaluator: E) -> Self {
        Self {
            config: SearchConfig::default(),
            evaluator,
            tie_breaker: LastSeen,
        }
    }
}

impl<E, K: TieBreaker> AdversarialSearchBuilder<E, K> {
    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Sets the number of plies to search.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Sets the largest accepted `max_depth * num_agents`.
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    /// Sets how ties between equally valued root actions are broken.
    pub fn with_tie_breaker<T: TieBreaker>(self, tie_breaker: T) -> AdversarialSearchBuilder<E, T> {
        AdversarialSearchBuilder {
            config: self.config,
            evaluator: self.evaluator,
            tie_breaker,
        }
    }

    /// Builds the `AdversarialSearch` instance with the configured parameters.
    pub fn build(self) -> AdversarialSearch<E, K> {
        AdversarialSearch {
            config: self.config,
            evaluator: self.evaluator,
            tie_breaker: self.tie_breaker,
        }
    }
}

impl<E> AdversarialSearch<E, LastSeen> {
    /// Returns a new builder for `AdversarialSearch`.
    pub fn builder(evaluator: E) -> AdversarialSearchBuilder<E, LastSeen> {
        AdversarialSearchBuilder::new(evaluator)
    }

    /// Creates a search that breaks ties in favour of the last best action.
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        AdversarialSearchBuilder::new(evaluator).with_config(config).build()
    }
}

impl<E, K: TieBreaker> AdversarialSearch<E, K> {
    /// Returns the configuration used by every search.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the evaluation function.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Returns the best action for the protagonist in `state`.
    ///
    /// # Errors
    /// Fails if the protagonist has no legal action, if the configuration cannot be used for
    /// this game, if the game's answers contradict each other, or if a node turns out to be
    /// worth NaN.
    pub fn choose_action<S>(&mut self, state: &S) -> Result<S::Action, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.search(state).map(|outcome| outcome.action)
    }

    /// Searches `state` and returns the chosen action together with the value of every root
    /// action and the search counters.
    pub fn search<S>(&mut self, state: &S) -> Result<SearchOutcome<S::Action>, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let num_agents = state.num_agents();
        self.config.validate(num_agents)?;

        let terminal = is_terminal(state)?;
        let actions = state.legal_actions(PROTAGONIST);
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }
        if terminal {
            return Err(SearchError::TerminalStateHasActions {
                agent: PROTAGONIST,
                actions: actions.len(),
            });
        }

        debug!(
            strategy = %self.config.strategy,
            max_depth = self.config.max_depth,
            num_agents,
            actions = actions.len(),
            "starting search"
        );

        let mut run = Run {
            config: &self.config,
            evaluator: &self.evaluator,
            num_agents,
            stats: SearchStats::default(),
        };
        let (value, action_values) = run.root(state, actions)?;
        let stats = run.stats;

        let best: Vec<usize> = action_values
            .iter()
            .enumerate()
            .filter(|(_, (_, v))| *v == value)
            .map(|(i, _)| i)
            .collect();
        let action = self
            .tie_breaker
            .choose(&best)
            .and_then(|&chosen| action_values.get(chosen))
            .map(|(action, _)| action.clone())
            .ok_or(SearchError::NotANumber { generation: 0 })?;

        debug!(
            action = ?action,
            value,
            tied = best.len(),
            nodes = stats.nodes_visited,
            leaves = stats.leaf_evaluations,
            cutoffs = stats.cutoffs,
            "search finished"
        );

        Ok(SearchOutcome {
            action,
            value,
            action_values,
            stats,
        })
    }
}

/// Searches `state` once with `config` and returns the protagonist's best action.
pub fn choose_action<S, E>(
    state: &S,
    evaluator: E,
    config: SearchConfig,
) -> Result<S::Action, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    AdversarialSearch::new(evaluator, config).choose_action(state)
}

// Holds the data shared by every node of one search.
struct Run<'a, E> {
    config: &'a SearchConfig,
    evaluator: &'a E,
    num_agents: usize,
    stats: SearchStats,
}

impl<E> Run<'_, E> {
    // The root is an ordinary Max node, except that the value of each action is kept.
    fn root<S>(
        &mut self,
        state: &S,
        actions: Vec<S::Action>,
    ) -> Result<(f64, Vec<(S::Action, f64)>), SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.nodes_visited += 1;

        let mut fold = Fold::new(
            NodeKind::Max,
            self.config.strategy.prunes(),
            Window::unbounded(),
            actions.len(),
        );
        let next = PlyCursor::root().step(self.num_agents);
        let mut action_values = Vec::with_capacity(actions.len());

        for action in actions {
            let child = successor(state, PROTAGONIST, &action)?;
            let value = self.value(&child, next, fold.window())?;
            trace!(action = ?action, value, "root action valued");
            action_values.push((action, value));
            if fold.push(value).is_break() {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok((fold.finish(), action_values))
    }

    fn value<S>(&mut self, state: &S, cursor: PlyCursor, window: Window) -> Result<f64, SearchError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.nodes_visited += 1;
        let generation = cursor.generations(self.num_agents);
        self.stats.max_generation = self.stats.max_generation.max(generation);

        if is_terminal(state)? || cursor.is_exhausted(self.config.max_depth) {
            self.stats.leaf_evaluations += 1;
            return not_nan(self.evaluator.evaluate(state), generation);
        }

        let agent = cursor.agent();
        let kind = if agent == PROTAGONIST {
            NodeKind::Max
        } else {
            self.config.strategy.adversary_node()
        };
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            warn!(agent, generation, "state is not terminal but has no legal actions");
        }

        let mut fold = Fold::new(kind, self.config.strategy.prunes(), window, actions.len());
        let next = cursor.step(self.num_agents);
        for action in &actions {
            let child = successor(state, agent, action)?;
            let value = self.value(&child, next, fold.window())?;
            if let ControlFlow::Break(value) = fold.push(value) {
                self.stats.cutoffs += 1;
                return Ok(value);
            }
        }
        // a chance node over both infinities averages to NaN
        not_nan(fold.finish(), generation)
    }
}

fn not_nan(value: f64, generation: usize) -> Result<f64, SearchError> {
    if value.is_nan() {
        return Err(SearchError::NotANumber { generation });
    }
    Ok(value)
}

fn is_terminal<S: GameState>(state: &S) -> Result<bool, SearchError> {
    if state.is_win() && state.is_lose() {
        return Err(SearchError::ConflictingOutcome);
    }
    Ok(state.is_terminal())
}

fn successor<S: GameState>(
    state: &S,
    agent: AgentIndex,
    action: &S::Action,
) -> Result<S, SearchError> {
    state
        .successor(agent, action)
        .ok_or_else(|| SearchError::IllegalSuccessor {
            agent,
            action: format!("{action:?}"),
        })
}
