/// Control actions supported by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and report the latest iterate.
    StopEarly,
}
