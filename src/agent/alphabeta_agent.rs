// Iterative-deepening agent
//
// Delegates entirely to the deepening driver: alpha-beta at increasing
// depth until the clock runs down, returning the answer from the last
// completed depth.

use super::{Agent, DEFAULT_THRESHOLD_MS};
use crate::game::{GameState, Move};
use crate::search::{iterative_deepening, Heuristic, TimeBudget};

/// Agent running iterative-deepening alpha-beta under the turn clock.
pub struct AlphaBetaAgent<H> {
    heuristic: H,
    threshold_ms: f64,
    name: String,
}

impl<H> AlphaBetaAgent<H> {
    pub fn new(heuristic: H) -> Self {
        AlphaBetaAgent {
            heuristic,
            threshold_ms: DEFAULT_THRESHOLD_MS,
            name: "AlphaBeta".to_string(),
        }
    }

    /// Abort the search when remaining time drops below `threshold_ms`.
    pub fn with_threshold(mut self, threshold_ms: f64) -> Self {
        self.threshold_ms = threshold_ms;
        self
    }

    /// Display name override.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<S, H> Agent<S> for AlphaBetaAgent<H>
where
    S: GameState,
    H: Heuristic<S>,
{
    fn get_move(&mut self, game: &S, time_left: &dyn Fn() -> f64) -> Move {
        let budget = TimeBudget::new(time_left, self.threshold_ms);
        iterative_deepening(game, &self.heuristic, &budget).best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}
