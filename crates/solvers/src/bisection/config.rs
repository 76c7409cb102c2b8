use rootline_core::Tolerance;

/// Configuration for the bisection solver.
///
/// [`Config::new`] reproduces the classic method: no iteration cap and no
/// check that the bracket actually changes sign. Both safeguards are opt-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tol: Tolerance,
    max_iters: Option<usize>,
    check_sign_change: bool,
}

impl Config {
    /// Creates a config that stops once the bracket is no wider than `tol`.
    #[must_use]
    pub fn new(tol: Tolerance) -> Self {
        Self {
            tol,
            max_iters: None,
            check_sign_change: false,
        }
    }

    /// Caps the number of halvings.
    ///
    /// A solve that would need more halvings fails with
    /// [`Error::NonConvergence`](super::Error::NonConvergence).
    ///
    /// Without a cap, a tolerance smaller than the float spacing near the
    /// root never converges: the bracket stops shrinking once its endpoints
    /// are adjacent floats.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    /// Evaluates both endpoints up front and rejects a bracket without a
    /// sign change.
    #[must_use]
    pub fn with_sign_change_check(mut self) -> Self {
        self.check_sign_change = true;
        self
    }

    /// Returns the bracket width tolerance.
    #[must_use]
    pub fn tol(&self) -> Tolerance {
        self.tol
    }

    /// Returns the iteration cap, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns true if the endpoints are checked for a sign change.
    #[must_use]
    pub fn checks_sign_change(&self) -> bool {
        self.check_sign_change
    }
}
