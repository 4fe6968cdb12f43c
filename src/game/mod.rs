// Core game types and the board collaborator contract
//
// The engine never owns a board. Everything it needs from one - legal move
// enumeration, successor generation, terminal detection - comes through the
// `GameState` trait, so concrete grids (or scripted fakes in tests) plug in
// without touching the search code.

use smallvec::SmallVec;

/// Heuristic and utility values. Decisive positions are `f64::INFINITY`
/// (won) and `f64::NEG_INFINITY` (lost) so they dominate any finite
/// heuristic value under min/max.
pub type Score = f64;

/// Legal-move list. Knight-style mobility tops out at 8 moves, so the
/// common case never touches the heap.
pub type MoveList = SmallVec<[Move; 8]>;

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A board coordinate pair (row, column).
///
/// `Move::NONE` is the reserved "no move available" sentinel, returned by
/// the search when the position is terminal or when a deadline abort fires
/// before any answer completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    /// Sentinel for "no move available", conventionally (-1, -1).
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub fn new(row: i8, col: i8) -> Move {
        Move { row, col }
    }

    /// True if this is the "no move" sentinel.
    pub fn is_none(self) -> bool {
        self == Move::NONE
    }
}

/// Board collaborator contract.
///
/// Implementations are immutable from the engine's point of view: `apply`
/// produces a new state and never mutates in place, so every ply of the
/// search works on a distinct value. `apply` is only defined for moves that
/// appear in the current `legal_moves` list; feeding it anything else is a
/// contract violation by the caller.
pub trait GameState: Clone {
    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    /// Legal moves for `player` in this state, in enumeration order.
    fn legal_moves_for(&self, player: Player) -> MoveList;

    /// Legal moves for the player to act. Empty means the active player
    /// has lost: a terminal position, not an error.
    fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.active_player())
    }

    /// Successor state after the active player plays `mv`.
    fn apply(&self, mv: Move) -> Self;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    /// Terminal value of this state from `player`'s perspective: +inf if
    /// won, -inf if lost, 0.0 while the game is still in progress.
    fn utility(&self, player: Player) -> Score {
        if self.is_winner(player) {
            Score::INFINITY
        } else if self.is_loser(player) {
            Score::NEG_INFINITY
        } else {
            0.0
        }
    }

    /// Board (width, height) in cells.
    fn dimensions(&self) -> (usize, usize);

    /// Number of cells that are neither blocked nor occupied. Also an
    /// upper bound on how many plies the game can still last.
    fn empty_cell_count(&self) -> usize;
}
