// Depth-limited minimax
//
// Alternating max/min value propagation with the heuristic at the depth
// horizon. Terminal detection takes precedence over the depth-0 cutoff: a
// position with no legal moves is valued by its utility, never by the
// heuristic. The root catches a mid-loop deadline abort itself and keeps
// the best fully completed child; an abort at entry propagates to the
// caller.

use super::evaluate::Heuristic;
use super::timer::{SearchTimeout, TimeBudget};
use super::SearchResult;
use crate::game::{GameState, Move, Player, Score};

/// Pick a move for the active player by minimax to `depth` plies.
///
/// Returns `Err(SearchTimeout)` only when the budget is already exhausted
/// on entry. A timeout that fires after at least one child finished is
/// absorbed here: the result carries the best move among the completed
/// children, or `Move::NONE` if none completed (fixed-depth search has no
/// shallower iteration to fall back to).
pub fn minimax<S, H>(
    game: &S,
    depth: u32,
    heuristic: &H,
    budget: &TimeBudget,
) -> Result<SearchResult, SearchTimeout>
where
    S: GameState,
    H: Heuristic<S>,
{
    budget.check()?;
    let player = game.active_player();
    let mut nodes = 1u64;

    let moves = game.legal_moves();
    if moves.is_empty() {
        return Ok(SearchResult {
            best_move: Move::NONE,
            score: game.utility(player),
            depth,
            nodes,
        });
    }

    let mut best_move = Move::NONE;
    let mut best_score = Score::NEG_INFINITY;
    let mut completed = false;

    for &mv in &moves {
        let child = game.apply(mv);
        match min_value(
            &child,
            depth.saturating_sub(1),
            heuristic,
            player,
            budget,
            &mut nodes,
        ) {
            Ok(value) => {
                // First completed child seeds the incumbent; after that
                // only a strict improvement replaces it, so ties keep the
                // earlier-enumerated move.
                if !completed || value > best_score {
                    best_score = value;
                    best_move = mv;
                }
                completed = true;
            }
            Err(SearchTimeout) => {
                return Ok(SearchResult {
                    best_move: if completed { best_move } else { Move::NONE },
                    score: best_score,
                    depth,
                    nodes,
                });
            }
        }
    }

    Ok(SearchResult {
        best_move,
        score: best_score,
        depth,
        nodes,
    })
}

/// Maximizing layer: best value `player` can force from here.
fn max_value<S, H>(
    game: &S,
    depth: u32,
    heuristic: &H,
    player: Player,
    budget: &TimeBudget,
    nodes: &mut u64,
) -> Result<Score, SearchTimeout>
where
    S: GameState,
    H: Heuristic<S>,
{
    budget.check()?;
    *nodes += 1;

    let moves = game.legal_moves();
    if moves.is_empty() {
        return Ok(game.utility(player));
    }
    if depth == 0 {
        return Ok(heuristic.score(game, player));
    }

    let mut v = Score::NEG_INFINITY;
    for &mv in &moves {
        let value = min_value(&game.apply(mv), depth - 1, heuristic, player, budget, nodes)?;
        v = v.max(value);
    }
    Ok(v)
}

/// Minimizing layer: best value the opponent can hold `player` to.
fn min_value<S, H>(
    game: &S,
    depth: u32,
    heuristic: &H,
    player: Player,
    budget: &TimeBudget,
    nodes: &mut u64,
) -> Result<Score, SearchTimeout>
where
    S: GameState,
    H: Heuristic<S>,
{
    budget.check()?;
    *nodes += 1;

    let moves = game.legal_moves();
    if moves.is_empty() {
        return Ok(game.utility(player));
    }
    if depth == 0 {
        return Ok(heuristic.score(game, player));
    }

    let mut v = Score::INFINITY;
    for &mv in &moves {
        let value = max_value(&game.apply(mv), depth - 1, heuristic, player, budget, nodes)?;
        v = v.min(value);
    }
    Ok(v)
}
