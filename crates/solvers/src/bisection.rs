//! Bisection for a scalar function on a bracketing interval.
//!
//! # Algorithm
//!
//! Starting from `[a, b]`, each iteration first checks the width: once
//! `b - a <= tol` the midpoint of the bracket is reported as the root.
//! Otherwise the midpoint `m` is evaluated. An exact zero ends the search.
//! If `f(m)` and `f(a)` have opposite signs the root lies in `[a, m]`,
//! otherwise in `[m, b]`.
//!
//! # Preconditions
//!
//! The bracket must contain a sign change of a continuous `f`. This is not
//! verified unless [`Config::with_sign_change_check`] is set; on an interval
//! without a sign change the search still narrows toward `b` and reports a
//! point that is not a root.
//!
//! There is no iteration cap unless [`Config::with_max_iters`] is set.
//!
//! # Floating-point stall
//!
//! Once the endpoints are adjacent floats the midpoint rounds onto one of
//! them and the bracket stops shrinking. A tolerance below the float spacing
//! near the root (about `|x| * f64::EPSILON`) is therefore never reached, and
//! without a cap the loop does not terminate. Keep `tol` above that spacing
//! or set [`Config::with_max_iters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to end the search at that midpoint. A
//! midpoint where `f` is exactly zero always ends with [`Status::ExactRoot`],
//! even if the observer also asked to stop.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootline_core::{Evaluable, Observer};

use bracket::opposite_signs;

/// Finds a root of `f` in `bracket` using the bisection method.
///
/// The observer receives an [`Event`] after each midpoint evaluation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the function fails or returns
/// `NaN`, the opt-in sign-change check fails, or the opt-in iteration cap is
/// reached.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Evaluable,
    Obs: Observer<Event, Action>,
{
    let mut bracket = Bracket::new(bracket)?;

    // Value of f at the current left endpoint, evaluated lazily.
    let mut f_left = None;

    if config.checks_sign_change() {
        let (left, right) = (bracket.left(), bracket.right());
        let fl = evaluate(f, left)?;
        let fr = evaluate(f, right)?;

        #[allow(clippy::float_cmp)]
        if fl == 0.0 {
            return Ok(Solution {
                status: Status::ExactRoot,
                x: left,
                bracket,
                iters: 0,
            });
        }
        #[allow(clippy::float_cmp)]
        if fr == 0.0 {
            return Ok(Solution {
                status: Status::ExactRoot,
                x: right,
                bracket,
                iters: 0,
            });
        }
        if !opposite_signs(fl, fr) {
            return Err(Error::NoSignChange {
                left,
                right,
                f_left: fl,
                f_right: fr,
            });
        }

        f_left = Some(fl);
    }

    let mut iters = 0;

    loop {
        if bracket.is_converged(config.tol()) {
            return Ok(Solution {
                status: Status::Converged,
                x: bracket.midpoint(),
                bracket,
                iters,
            });
        }

        if config.max_iters().is_some_and(|max| iters >= max) {
            return Err(Error::NonConvergence {
                iters,
                last: bracket.midpoint(),
            });
        }

        iters += 1;

        let mid = bracket.midpoint();
        let f_mid = evaluate(f, mid)?;

        let event = Event {
            iter: iters,
            bracket,
            x: mid,
            fx: f_mid,
        };

        let action = observer.observe(&event);

        #[allow(clippy::float_cmp)]
        if f_mid == 0.0 {
            return Ok(Solution {
                status: Status::ExactRoot,
                x: mid,
                bracket,
                iters,
            });
        }

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: mid,
                bracket,
                iters,
            });
        }

        let fl = match f_left {
            Some(value) => value,
            None => evaluate(f, bracket.left())?,
        };

        if opposite_signs(fl, f_mid) {
            bracket.keep_left(mid);
            f_left = Some(fl);
        } else {
            bracket.keep_right(mid);
            f_left = Some(f_mid);
        }
    }
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Evaluable>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}

/// Evaluates `f` at `x`, rejecting `NaN` since it has no sign.
fn evaluate<F: Evaluable>(f: &F, x: f64) -> Result<f64, Error> {
    let fx = f.evaluate(x).map_err(|err| Error::eval(x, err))?;
    if fx.is_nan() {
        return Err(Error::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}
