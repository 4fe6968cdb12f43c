// Static evaluation heuristics
//
// A heuristic maps (state, perspective player) to a score. Decided games
// short-circuit to +/-inf before any formula runs; otherwise the provided
// heuristics combine own and opponent mobility, optionally scaled by how
// far the game has progressed.

use crate::game::{GameState, Player, Score};

/// Static evaluation of a game state from one player's point of view.
///
/// Implementations must be pure functions of their arguments: no side
/// effects, safe to call on independent states concurrently. Any closure
/// `Fn(&S, Player) -> Score` qualifies, so agents can take a plain
/// function pointer or an ad-hoc closure interchangeably.
pub trait Heuristic<S: GameState> {
    fn score(&self, game: &S, player: Player) -> Score;
}

impl<S, F> Heuristic<S> for F
where
    S: GameState,
    F: Fn(&S, Player) -> Score,
{
    fn score(&self, game: &S, player: Player) -> Score {
        self(game, player)
    }
}

/// Cells filled so far, floored at 1 so it never zeroes out a product.
fn filled_cells<S: GameState>(game: &S) -> Score {
    let (w, h) = game.dimensions();
    let filled = (w * h).saturating_sub(game.empty_cell_count());
    filled.max(1) as Score
}

/// Mobility difference for `player`: own moves minus opponent moves.
fn mobility_gap<S: GameState>(game: &S, player: Player) -> Score {
    let own = game.legal_moves_for(player).len() as Score;
    let opp = game.legal_moves_for(player.opponent()).len() as Score;
    own - opp
}

/// `(own - opp) * filled * 0.5`: mobility gap, half-weighted by game
/// progress so the gap matters more as the board closes up.
pub fn damped_mobility<S: GameState>(game: &S, player: Player) -> Score {
    if game.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if game.is_winner(player) {
        return Score::INFINITY;
    }
    mobility_gap(game, player) * filled_cells(game) * 0.5
}

/// `(own - opp) * filled`: mobility gap at full progress weight.
pub fn weighted_mobility<S: GameState>(game: &S, player: Player) -> Score {
    if game.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if game.is_winner(player) {
        return Score::INFINITY;
    }
    mobility_gap(game, player) * filled_cells(game)
}

/// Phase-split heuristic: while more than 80% of the board is still empty
/// the opponent is too far away to matter, so only own mobility counts;
/// after that, plain mobility gap.
pub fn phased_mobility<S: GameState>(game: &S, player: Player) -> Score {
    if game.is_loser(player) {
        return Score::NEG_INFINITY;
    }
    if game.is_winner(player) {
        return Score::INFINITY;
    }
    let (w, h) = game.dimensions();
    let empty = game.empty_cell_count() as f64;
    if empty > 0.8 * (w * h) as f64 {
        game.legal_moves_for(player).len() as Score
    } else {
        mobility_gap(game, player)
    }
}
