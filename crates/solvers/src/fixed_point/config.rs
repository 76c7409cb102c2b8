use rootline_core::Tolerance;

/// Configuration for fixed-point iteration.
///
/// [`Config::new`] has no iteration cap, so a divergent or oscillating
/// sequence runs until it leaves the finite range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: Tolerance,
    max_iters: Option<usize>,
}

impl Config {
    /// Creates a config that stops once successive iterates are within `tol`.
    #[must_use]
    pub fn new(tol: Tolerance) -> Self {
        Self {
            tol,
            max_iters: None,
        }
    }

    /// Caps the number of function evaluations.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    #[must_use]
    pub fn tol(&self) -> Tolerance {
        self.tol
    }

    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }
}
