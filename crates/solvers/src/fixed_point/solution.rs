use crate::intersection::Bracket;

/// Indicates why the fixed-point loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed to within the configured tolerance.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a fixed-point solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Midpoint of the final bracket.
    pub x1: f64,
    /// Level of the free curve for the final bracket search.
    pub level: f64,
    /// Crossings found by the final bracket search.
    pub bracket: Bracket,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, level: f64, bracket: Bracket, iters: usize) -> Self {
        Self {
            status,
            x1: bracket.midpoint(),
            level,
            bracket,
            iters,
        }
    }
}
