// Deadline guard for cooperative search cancellation
//
// The engine never reads the wall clock itself. The match orchestrator hands
// `get_move` an accessor returning the milliseconds left in the turn; the
// guard re-reads it at every recursive entry and converts an expiring clock
// into a `SearchTimeout` that unwinds the in-flight search through `?`.

use thiserror::Error;

/// Cooperative cancellation signal raised when the remaining time drops
/// below the configured threshold.
///
/// This is an expected outcome, not an engine failure. It must propagate
/// unchanged through every recursive level and be handled exactly once, at
/// the call that initiated the top-level search; a mid-tree catch would
/// turn a partial, meaningless minimax value into an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search aborted: remaining time fell below the deadline threshold")]
pub struct SearchTimeout;

/// Remaining-time accessor plus the abort threshold.
///
/// The accessor is queried on every `check`, never cached: its value
/// changes between calls and a stale read would defeat the deadline.
pub struct TimeBudget<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold_ms: f64,
}

impl<'a> TimeBudget<'a> {
    /// Wrap a milliseconds-remaining accessor with an abort threshold.
    ///
    /// The threshold should be large enough for the deepest unwinding to
    /// return before the timer actually reaches zero; returning with
    /// negative time left forfeits the game, and that is the caller's
    /// problem, not the guard's.
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold_ms: f64) -> TimeBudget<'a> {
        TimeBudget {
            time_left,
            threshold_ms,
        }
    }

    /// Abort check, called at the top of every recursive search entry.
    pub fn check(&self) -> Result<(), SearchTimeout> {
        if (self.time_left)() < self.threshold_ms {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    /// Milliseconds currently remaining, as reported by the accessor.
    pub fn time_left(&self) -> f64 {
        (self.time_left)()
    }
}
