use rootline_core::Observer;

use crate::traits::{CanStopEarly, HasProgress};

/// Stops a solver once it has completed `max_iters` iterations.
///
/// Unlike a solver's own iteration cap, which fails with a non-convergence
/// error, this ends the solve successfully with the latest estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    max_iters: usize,
}

impl StopAfter {
    #[must_use]
    pub fn new(max_iters: usize) -> Self {
        Self { max_iters }
    }
}

impl<E: HasProgress, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.max_iters).then(A::stop_early)
    }
}

/// Stops a solver as soon as its spread drops to `threshold` or below.
///
/// Useful for a coarse first pass with a config that keeps a tight tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadBelow {
    threshold: f64,
}

impl SpreadBelow {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl<E: HasProgress, A: CanStopEarly> Observer<E, A> for SpreadBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.spread() <= self.threshold).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::Tolerance;
    use rootline_solvers::{bisection, fixed_point};

    fn tol(value: f64) -> Tolerance {
        Tolerance::new(value).expect("valid tolerance")
    }

    #[test]
    fn stop_after_ends_bisection() {
        let f = |x: f64| x * x - 2.0;
        let config = bisection::Config::new(tol(1e-12));

        let solution =
            bisection::solve(&f, [0.0, 2.0], &config, StopAfter::new(4)).expect("should stop");

        assert_eq!(solution.status, bisection::Status::StoppedByObserver);
        assert_eq!(solution.iters, 4);
    }

    #[test]
    fn stop_after_ends_fixed_point() {
        let f = |x: f64| x.cos();
        let config = fixed_point::Config::new(tol(1e-12));

        let solution = fixed_point::solve(&f, 1.0, &config, StopAfter::new(3)).expect("should stop");

        assert_eq!(solution.status, fixed_point::Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
    }

    #[test]
    fn spread_below_stops_on_step_length() {
        let f = |x: f64| 0.5 * x;
        let config = fixed_point::Config::new(tol(1e-12));

        // steps: 8, 4, 2, 1, 0.5, ...
        let solution =
            fixed_point::solve(&f, 16.0, &config, SpreadBelow::new(1.0)).expect("should stop");

        assert_eq!(solution.status, fixed_point::Status::StoppedByObserver);
        assert_eq!(solution.iters, 4);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn spread_below_stops_on_bracket_width() {
        let f = |x: f64| x - 0.3;
        let config = bisection::Config::new(tol(1e-12));

        let solution =
            bisection::solve(&f, [0.0, 1.0], &config, SpreadBelow::new(0.25)).expect("should stop");

        // The event bracket is the one the midpoint came from: widths 1, 0.5, 0.25.
        assert_eq!(solution.iters, 3);
        assert_relative_eq!(solution.bracket.width(), 0.25);
    }
}
