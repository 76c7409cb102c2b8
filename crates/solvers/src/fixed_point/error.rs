use std::error::Error as StdError;

/// Errors that can occur during fixed-point iteration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("initial guess must be finite, got {x0}")]
    NonFiniteStart { x0: f64 },

    #[error("iterate became {fx} after x = {x}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("function evaluation failed at x = {x}")]
    Eval {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("no convergence after {iters} iterations, last iterate {last}")]
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
