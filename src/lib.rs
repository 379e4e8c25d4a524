//! A small library for depth-limited multi-agent adversarial search.
//!
//! Given a turn-based game shared by a protagonist (agent 0) and any number of adversaries, the
//! library picks the protagonist's next action by exploring the tree of future states to a fixed
//! number of plies and scoring the frontier with a pluggable evaluation function. One ply is a
//! full round in which every agent moves once.
//!
//! Three strategies are available:
//! - **Minimax**: adversaries play the reply that is worst for the protagonist.
//! - **Alpha-beta**: the same decisions as minimax, visiting fewer nodes.
//! - **Expectimax**: adversaries move uniformly at random.
//!
//! # Example
//!
//! ```rust
//! use adversarial_search::boards::tic_tac_toe::{Mark, TicTacToeBoard};
//! use adversarial_search::evaluation::ScoreEvaluator;
//! use adversarial_search::search::AdversarialSearch;
//! use adversarial_search::strategy::Strategy;
//!
//! // X has played the centre, O a corner, and X is to move
//! let board = TicTacToeBoard::with_moves(Mark::X, &[4, 0]).unwrap();
//!
//! // Create and configure a new search using the builder
//! let mut search = AdversarialSearch::builder(ScoreEvaluator)
//!     .with_strategy(Strategy::AlphaBeta)
//!     .with_max_depth(4)
//!     .build();
//!
//! let outcome = search.search(&board).unwrap();
//! println!("The best move is {} ({} nodes)", outcome.action, outcome.stats.nodes_visited);
//! assert_eq!(outcome.value, 0.0);
//! ```

/// Contains pre-made implementations of the `GameState` trait.
pub mod boards;
/// Search configuration.
pub mod config;
/// The error type shared by every search.
pub mod error;
/// Contains the `Evaluator` trait and the default score evaluator.
pub mod evaluation;
/// Round-robin ply bookkeeping.
pub mod ply;
/// Contains traits and implementations for breaking ties between equally good actions.
pub mod random;
/// The core module of the library, containing the `AdversarialSearch` implementation.
pub mod search;
/// Contains the `GameState` trait through which the search sees a game.
pub mod state;
/// The three search strategies and the node folds they are built from.
pub mod strategy;

pub use config::SearchConfig;
pub use error::SearchError;
pub use evaluation::{Evaluator, ScoreEvaluator, Scored};
pub use search::{AdversarialSearch, SearchOutcome, SearchStats, choose_action};
pub use state::{AgentIndex, GameOutcome, GameState, PROTAGONIST};
pub use strategy::Strategy;
