/// Indicates how the fixed-point solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Successive iterates came within the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The last iterate, the fixed point estimate.
    pub x: f64,

    /// Distance between the last two iterates.
    pub delta: f64,

    /// Number of function evaluations.
    pub iters: usize,
}
