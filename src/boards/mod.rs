//! Contains pre-made implementations of the `GameState` trait.

/// An explicit game tree with any number of agents, handy for experiments and tests.
pub mod game_tree;
/// A `GameState` implementation for the game of Tic-Tac-Toe.
pub mod tic_tac_toe;
