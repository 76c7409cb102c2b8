/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and report the midpoint just evaluated.
    ///
    /// Ignored when that midpoint is an exact root, which is reported as
    /// [`Status::ExactRoot`](super::Status::ExactRoot).
    StopEarly,
}
