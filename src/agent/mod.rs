// Move-selecting agents
//
// An agent binds a heuristic, a search strategy, and a deadline threshold
// into the single `get_move` entry point the match orchestrator calls.
// Configuration is fixed at construction; one agent instance serves every
// move request of a match.

mod alphabeta_agent;
mod minimax_agent;

pub use alphabeta_agent::AlphaBetaAgent;
pub use minimax_agent::MinimaxAgent;

use crate::game::{GameState, Move};

/// Milliseconds of slack left on the clock when the search gives up.
/// Large enough for the abort to unwind and return before the timer
/// actually expires.
pub const DEFAULT_THRESHOLD_MS: f64 = 10.0;

/// An entity that picks moves under a wall-clock budget.
///
/// `time_left` reports the milliseconds remaining in the current turn and
/// is re-read throughout the search; returning after it goes negative
/// forfeits the game, which is why agents abort early and fall back to the
/// best answer they have. `Move::NONE` is returned only when the position
/// has no legal move or nothing completed before the deadline.
pub trait Agent<S: GameState> {
    /// Pick a move for the active player in `game`.
    fn get_move(&mut self, game: &S, time_left: &dyn Fn() -> f64) -> Move;

    /// Display name for logs and match records.
    fn name(&self) -> &str {
        "Agent"
    }
}
