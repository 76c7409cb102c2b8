/// Event emitted by the fixed-point solver after each evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Evaluation counter (1-based).
    pub iter: usize,

    /// The iterate `f` was evaluated at.
    pub x_prev: f64,

    /// The new iterate `f(x_prev)`.
    pub x_next: f64,
}

impl Event {
    /// Returns the distance between the two iterates.
    #[must_use]
    pub fn delta(&self) -> f64 {
        (self.x_next - self.x_prev).abs()
    }
}
