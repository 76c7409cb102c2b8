use super::Bracket;

/// Event emitted by the bisection solver after each midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Halving counter (1-based).
    pub iter: usize,

    /// Bracket the midpoint was taken from, before it is narrowed.
    pub bracket: Bracket,

    /// The evaluated midpoint.
    pub x: f64,

    /// Function value at the midpoint.
    pub fx: f64,
}
