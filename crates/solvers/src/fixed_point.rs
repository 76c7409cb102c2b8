//! Fixed-point iteration `x ← f(x)` for a scalar function.
//!
//! Starting from `x0`, each step computes `x1 = f(x0)`. Once
//! `|x1 - x0| <= tol` the new iterate `x1` is reported; otherwise `x0 ← x1`
//! and the step repeats.
//!
//! Convergence needs `f` to be a contraction near the fixed point
//! (`|f'(x)| < 1`). That is not checked. A divergent sequence ends with
//! [`Error::NonFiniteEvaluation`] once it overflows, and an oscillating one
//! runs forever unless [`Config::with_max_iters`] is set.
//!
//! The solver emits one [`Event`] per evaluation; observers can return
//! [`Action::StopEarly`].

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootline_core::{Evaluable, Observer};

/// Iterates `x ← f(x)` from `x0` until successive iterates agree within the
/// configured tolerance.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite, the function fails or produces a
/// non-finite iterate, or the opt-in iteration cap is reached.
pub fn solve<F, Obs>(
    f: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Evaluable,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { x0 });
    }

    let tol = config.tol().value();
    let mut x_prev = x0;
    let mut iters = 0;

    loop {
        if config.max_iters().is_some_and(|max| iters >= max) {
            return Err(Error::NonConvergence {
                iters,
                last: x_prev,
            });
        }

        iters += 1;

        let x_next = f.evaluate(x_prev).map_err(|err| Error::eval(x_prev, err))?;
        if !x_next.is_finite() {
            return Err(Error::NonFiniteEvaluation {
                x: x_prev,
                fx: x_next,
            });
        }

        let event = Event {
            iter: iters,
            x_prev,
            x_next,
        };
        let delta = event.delta();

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: x_next,
                delta,
                iters,
            });
        }

        if delta <= tol {
            return Ok(Solution {
                status: Status::Converged,
                x: x_next,
                delta,
                iters,
            });
        }

        x_prev = x_next;
    }
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Evaluable>(f: &F, x0: f64, config: &Config) -> Result<Solution, Error> {
    solve(f, x0, config, ())
}
