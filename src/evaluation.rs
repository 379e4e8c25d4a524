/// Scores a game state from the protagonist's point of view. Higher is better.
///
/// Any `Fn(&S) -> f64` is an evaluator, so closures can be handed to the search directly:
///
/// ```rust
/// use adversarial_search::evaluation::Evaluator;
///
/// let by_length = |s: &String| s.len() as f64;
/// assert_eq!(by_length.evaluate(&"abc".to_string()), 3.0);
/// ```
pub trait Evaluator<S> {
    /// Returns the heuristic value of `state`.
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// A state that keeps a running game score, such as the points shown on screen.
pub trait Scored {
    /// Returns the current game score.
    fn score(&self) -> f64;
}

/// The default evaluator: the value of a state is its game score.
#[derive(Debug, Default, Copy, Clone)]
pub struct ScoreEvaluator;

impl<S: Scored> Evaluator<S> for ScoreEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        state.score()
    }
}
