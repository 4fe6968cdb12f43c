// Isolation game-tree search engine
//
// A time-bounded adversarial search engine for two-player, perfect-information,
// zero-sum grid games in the Isolation family. The board representation is
// supplied by the caller through the `GameState` trait; the engine provides
// depth-limited minimax, alpha-beta pruning, iterative deepening under a
// wall-clock budget, and move-selecting agents that bind the pieces together.
//
// A small batch sequence recognizer (scoring test items against pre-trained
// models) lives in `recognizer` and shares nothing with the search core.

pub mod agent;
pub mod game;
pub mod recognizer;
pub mod search;

pub use agent::{Agent, AlphaBetaAgent, MinimaxAgent};
pub use game::{GameState, Move, MoveList, Player, Score};
pub use search::{SearchResult, SearchTimeout, TimeBudget};
