// Iterative deepening driver
//
// Runs alpha-beta at depth 0, 1, 2, ... until the deadline guard aborts or
// the depth bound is exhausted, keeping the answer from the last depth that
// completed. A deeper search cut off mid-flight never overrides a shallower
// completed one, so the driver always has something legal to return as long
// as the position has a legal move at all.

use log::debug;

use super::alphabeta::alphabeta;
use super::evaluate::Heuristic;
use super::timer::{SearchTimeout, TimeBudget};
use super::SearchResult;
use crate::game::{GameState, Move, Score};

/// Anytime move selection for the active player.
///
/// The answer starts as the first legal move (the sentinel only when the
/// move list is truly empty), so even an immediate abort returns something
/// playable. The depth bound is the number of empty cells: no game can
/// last more plies than that.
pub fn iterative_deepening<S, H>(game: &S, heuristic: &H, budget: &TimeBudget) -> SearchResult
where
    S: GameState,
    H: Heuristic<S>,
{
    let player = game.active_player();
    let moves = game.legal_moves();
    if moves.is_empty() {
        return SearchResult {
            best_move: Move::NONE,
            score: game.utility(player),
            depth: 0,
            nodes: 0,
        };
    }

    let mut best = SearchResult {
        best_move: moves[0],
        score: Score::NEG_INFINITY,
        depth: 0,
        nodes: 0,
    };
    let mut total_nodes = 0u64;
    let max_depth = game.empty_cell_count() as u32;

    for depth in 0..max_depth {
        match alphabeta(
            game,
            depth,
            Score::NEG_INFINITY,
            Score::INFINITY,
            heuristic,
            budget,
        ) {
            Ok(result) => {
                total_nodes += result.nodes;
                debug!(
                    "depth {} complete: move {:?} score {} nodes {} time_left {:.1}ms",
                    depth,
                    result.best_move,
                    result.score,
                    total_nodes,
                    budget.time_left()
                );
                best = SearchResult {
                    best_move: result.best_move,
                    score: result.score,
                    depth,
                    nodes: total_nodes,
                };
            }
            Err(SearchTimeout) => {
                debug!(
                    "deadline hit at depth {}, keeping depth-{} answer {:?}",
                    depth, best.depth, best.best_move
                );
                break;
            }
        }
    }

    best
}
