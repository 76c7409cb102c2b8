use super::Bracket;

/// Indicates how the bisection solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed to within the tolerance.
    Converged,

    /// A midpoint evaluated to exactly zero.
    ExactRoot,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Bracket at termination.
    pub bracket: Bracket,

    /// Number of halvings performed.
    pub iters: usize,
}
