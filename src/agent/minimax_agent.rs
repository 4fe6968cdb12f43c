// Fixed-depth search agent
//
// Runs a single depth-limited search per move request, plain minimax by
// default or alpha-beta when configured with `with_pruning`. The deadline
// abort is swallowed here: the plain search hands back its best completed
// child on its own, while the pruned search has no partial answer, so its
// fallback is the first legal move.

use super::{Agent, DEFAULT_THRESHOLD_MS};
use crate::game::{GameState, Move, Score};
use crate::search::{alphabeta, minimax, Heuristic, TimeBudget};

/// Agent searching to a fixed depth every turn.
pub struct MinimaxAgent<H> {
    search_depth: u32,
    heuristic: H,
    threshold_ms: f64,
    use_pruning: bool,
    name: String,
}

impl<H> MinimaxAgent<H> {
    /// Agent searching `search_depth` plies with the given heuristic and
    /// the default deadline threshold.
    pub fn new(search_depth: u32, heuristic: H) -> Self {
        MinimaxAgent {
            search_depth,
            heuristic,
            threshold_ms: DEFAULT_THRESHOLD_MS,
            use_pruning: false,
            name: "Minimax".to_string(),
        }
    }

    /// Abort the search when remaining time drops below `threshold_ms`.
    pub fn with_threshold(mut self, threshold_ms: f64) -> Self {
        self.threshold_ms = threshold_ms;
        self
    }

    /// Use alpha-beta pruning for the fixed-depth call.
    pub fn with_pruning(mut self) -> Self {
        self.use_pruning = true;
        self.name = "Minimax (pruned)".to_string();
        self
    }

    /// Display name override.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<S, H> Agent<S> for MinimaxAgent<H>
where
    S: GameState,
    H: Heuristic<S>,
{
    fn get_move(&mut self, game: &S, time_left: &dyn Fn() -> f64) -> Move {
        let budget = TimeBudget::new(time_left, self.threshold_ms);

        if self.use_pruning {
            // Alpha-beta keeps no best-so-far of its own; seed the
            // fallback with the first legal move.
            let fallback = game.legal_moves().first().copied().unwrap_or(Move::NONE);
            match alphabeta(
                game,
                self.search_depth,
                Score::NEG_INFINITY,
                Score::INFINITY,
                &self.heuristic,
                &budget,
            ) {
                Ok(result) => result.best_move,
                Err(_) => fallback,
            }
        } else {
            match minimax(game, self.search_depth, &self.heuristic, &budget) {
                Ok(result) => result.best_move,
                Err(_) => Move::NONE,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
