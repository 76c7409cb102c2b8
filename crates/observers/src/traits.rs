//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer works with both [`bisection`] and [`fixed_point`].
//!
//! - [`HasProgress`]: events that report an iteration, an estimate, and the
//!   remaining spread the solver compares against its tolerance
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasProgress};
//!
//! /// Stops once the estimate moves by less than `min_step` after a warm-up.
//! struct Stalled {
//!     min_step: f64,
//!     warm_up: usize,
//!     last: Option<f64>,
//! }
//!
//! impl<E: HasProgress, A: CanStopEarly> Observer<E, A> for Stalled {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let last = self.last.replace(event.estimate())?;
//!         let stalled = (event.estimate() - last).abs() < self.min_step;
//!         (event.iter() > self.warm_up && stalled).then(A::stop_early)
//!     }
//! }
//! ```

use rootline_solvers::{bisection, fixed_point};

/// An event that reports solver progress.
pub trait HasProgress {
    /// Iteration counter (1-based).
    fn iter(&self) -> usize;

    /// The current estimate of the root or fixed point.
    fn estimate(&self) -> f64;

    /// The quantity compared against the tolerance: bracket width for
    /// bisection, step length for fixed-point iteration.
    fn spread(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasProgress for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn estimate(&self) -> f64 {
        self.x
    }

    fn spread(&self) -> f64 {
        self.bracket.width()
    }
}

impl HasProgress for fixed_point::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn estimate(&self) -> f64 {
        self.x_next
    }

    fn spread(&self) -> f64 {
        self.delta()
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
