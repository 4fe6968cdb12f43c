// Game-tree search: plain minimax, alpha-beta pruning, iterative deepening
//
// All three entry points are generic over the `GameState` board contract and
// a pluggable `Heuristic`. The tree is generated and discarded depth-first;
// no node outlives its parent call. Time pressure is observed in exactly one
// way: the `TimeBudget` guard checked at every recursive entry.

mod alphabeta;
mod deepening;
mod evaluate;
mod minimax;
mod timer;

#[cfg(test)]
pub(crate) mod fixtures;

pub use alphabeta::alphabeta;
pub use deepening::iterative_deepening;
pub use evaluate::{damped_mobility, phased_mobility, weighted_mobility, Heuristic};
pub use minimax::minimax;
pub use timer::{SearchTimeout, TimeBudget};

use crate::game::{Move, Score};

/// Outcome of one search call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Chosen move; `Move::NONE` when the position is terminal or nothing
    /// completed before the deadline.
    pub best_move: Move,
    /// Value backing the chosen move, from the searching player's
    /// perspective.
    pub score: Score,
    /// Deepest fully completed search depth.
    pub depth: u32,
    /// Recursive entries visited, for pruning instrumentation.
    pub nodes: u64,
}
