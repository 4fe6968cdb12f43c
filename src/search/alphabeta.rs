// Alpha-beta pruned minimax
//
// Same alternating max/min recursion as the plain search, with bound
// propagation: a maximizing layer stops as soon as a child reaches beta, a
// minimizing layer as soon as one falls to alpha. For any depth >= 1 the
// chosen move is identical to plain minimax; only the number of nodes
// visited differs.
//
// One deliberate asymmetry with the plain search: depth-0 leaves evaluate
// the heuristic directly, with no terminal pre-check. Interior layers still
// detect terminal positions implicitly - an empty move list leaves the
// +/-inf accumulator untouched, which is exactly the utility of a stuck
// player. Deadline aborts are not caught here; they propagate to whoever
// initiated the search (the deepening driver or a fixed-depth agent).

use super::evaluate::Heuristic;
use super::timer::{SearchTimeout, TimeBudget};
use super::SearchResult;
use crate::game::{GameState, Move, Player, Score};

/// Pick a move for the active player by alpha-beta search to `depth` plies.
///
/// `alpha`/`beta` are the usual window bounds; top-level callers pass
/// `(-inf, +inf)`. The root raises alpha as children complete but never
/// prunes against it, so the returned move matches plain minimax.
pub fn alphabeta<S, H>(
    game: &S,
    depth: u32,
    mut alpha: Score,
    beta: Score,
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
        let value = min_value(
            &child,
            depth.saturating_sub(1),
            alpha,
            beta,
            heuristic,
            player,
            budget,
            &mut nodes,
        )?;
        if !completed || value > best_score {
            best_score = value;
            best_move = mv;
        }
        completed = true;
        alpha = alpha.max(value);
    }

    Ok(SearchResult {
        best_move,
        score: best_score,
        depth,
        nodes,
    })
}

/// Maximizing layer with a beta cutoff.
#[allow(clippy::too_many_arguments)]
fn max_value<S, H>(
    game: &S,
    depth: u32,
    mut alpha: Score,
    beta: Score,
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

    if depth == 0 {
        return Ok(heuristic.score(game, player));
    }

    let mut v = Score::NEG_INFINITY;
    for &mv in &game.legal_moves() {
        let value = min_value(
            &game.apply(mv),
            depth - 1,
            alpha,
            beta,
            heuristic,
            player,
            budget,
            nodes,
        )?;
        v = v.max(value);
        if v >= beta {
            return Ok(v);
        }
        alpha = alpha.max(v);
    }
    Ok(v)
}

/// Minimizing layer with an alpha cutoff.
#[allow(clippy::too_many_arguments)]
fn min_value<S, H>(
    game: &S,
    depth: u32,
    alpha: Score,
    mut beta: Score,
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

    if depth == 0 {
        return Ok(heuristic.score(game, player));
    }

    let mut v = Score::INFINITY;
    for &mv in &game.legal_moves() {
        let value = max_value(
            &game.apply(mv),
            depth - 1,
            alpha,
            beta,
            heuristic,
            player,
            budget,
            nodes,
        )?;
        v = v.min(value);
        if v <= alpha {
            return Ok(v);
        }
        beta = beta.min(v);
    }
    Ok(v)
}
