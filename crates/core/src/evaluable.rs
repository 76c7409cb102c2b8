use std::convert::Infallible;

/// A scalar function `f: ℝ → ℝ` that solvers can evaluate.
///
/// Solvers only ever read through this trait, so the function can be backed
/// by a plain closure, a compiled expression, or a binding to an external
/// algebra engine.
///
/// Every `Fn(f64) -> f64` is `Evaluable` and cannot fail. Wrap a function
/// returning `Result<f64, E>` in [`Fallible`] when evaluation can fail, for
/// example outside the function's domain.
pub trait Evaluable {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function is undefined or fails at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Evaluable for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapts a fallible function `Fn(f64) -> Result<f64, E>` to [`Evaluable`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Evaluable for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}
