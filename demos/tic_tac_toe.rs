extern crate adversarial_search;

use adversarial_search::boards::tic_tac_toe::{Mark, TicTacToeBoard};
use adversarial_search::evaluation::ScoreEvaluator;
use adversarial_search::random::StandardRandomGenerator;
use adversarial_search::search::AdversarialSearch;
use adversarial_search::state::GameState;
use adversarial_search::strategy::Strategy;

fn main() {
    // X searches the whole game with alpha-beta pruning
    let mut x = AdversarialSearch::builder(ScoreEvaluator)
        .with_strategy(Strategy::AlphaBeta)
        .with_max_depth(5)
        .with_tie_breaker(StandardRandomGenerator)
        .build();

    // O expects X to move at random
    let mut o = AdversarialSearch::builder(ScoreEvaluator)
        .with_strategy(Strategy::Expectimax)
        .with_max_depth(5)
        .with_tie_breaker(StandardRandomGenerator)
        .build();

    let mut board = TicTacToeBoard::default();
    while !board.is_terminal() {
        let mover = board.to_move();
        let view = board.for_protagonist(mover);
        let outcome = match mover {
            Mark::X => x.search(&view),
            Mark::O => o.search(&view),
        }
        .expect("the player to move always has a legal action");

        println!(
            "{:?} plays {} (value {:.2}, {} nodes)",
            mover, outcome.action, outcome.value, outcome.stats.nodes_visited
        );
        board = board
            .play(outcome.action)
            .expect("the search only returns legal actions");
        println!("{board}");
    }

    match board.winner() {
        Some(mark) => println!("{mark:?} wins"),
        None => println!("Draw"),
    }
    assert_ne!(board.winner(), Some(Mark::O), "a full-depth search never loses");
}
