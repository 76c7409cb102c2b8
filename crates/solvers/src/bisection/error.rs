use std::error::Error as StdError;

use thiserror::Error;

use super::bracket::BracketError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("no sign change on [{left}, {right}]: f(left)={f_left}, f(right)={f_right}")]
    NoSignChange {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },

    #[error("function returned {fx} at x = {x}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("function evaluation failed at x = {x}")]
    Eval {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("no convergence after {iters} iterations, last midpoint {last}")]
    NonConvergence { iters: usize, last: f64 },
}

impl Error {
    pub(crate) fn eval<E: StdError + Send + Sync + 'static>(x: f64, err: E) -> Self {
        Self::Eval {
            x,
            source: Box::new(err),
        }
    }
}
