use std::fmt;

use rootline_core::{Observer, Tolerance};

use crate::traits::HasProgress;

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub iter: usize,
    pub estimate: f64,
    pub spread: f64,
}

/// An observer that records every iteration and never intervenes.
///
/// Pass `&mut Trace` as the solver observer to keep the trace after the solve
/// returns. `Display` renders it as a table, with estimates printed to the
/// precision of the tolerance given to [`Trace::with_precision`].
///
/// ```
/// use rootline_core::Tolerance;
/// use rootline_observers::Trace;
/// use rootline_solvers::bisection;
///
/// let tol = Tolerance::new(1e-3).unwrap();
/// let mut trace = Trace::with_precision(tol);
///
/// let f = |x: f64| x * x - 2.0;
/// let solution = bisection::solve(&f, [0.0, 2.0], &bisection::Config::new(tol), &mut trace).unwrap();
///
/// assert_eq!(trace.rows().len(), solution.iters);
/// println!("{trace}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    rows: Vec<Row>,
    digits: Option<usize>,
}

impl Trace {
    /// Creates an empty trace that prints estimates with default formatting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trace that prints estimates to `tol.digits()` places.
    #[must_use]
    pub fn with_precision(tol: Tolerance) -> Self {
        Self {
            rows: Vec::new(),
            digits: Some(tol.digits()),
        }
    }

    /// Returns the recorded rows in iteration order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Records an event.
    pub fn record<E: HasProgress>(&mut self, event: &E) {
        self.rows.push(Row {
            iter: event.iter(),
            estimate: event.estimate(),
            spread: event.spread(),
        });
    }
}

impl<E: HasProgress, A> Observer<E, A> for Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut Trace` to be passed to solvers that take an observer by value.
impl<E: HasProgress, A> Observer<E, A> for &mut Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5}  {:>24}  {:>12}", "iter", "estimate", "spread")?;
        for row in &self.rows {
            match self.digits {
                Some(digits) => writeln!(
                    f,
                    "{:>5}  {:>24.digits$}  {:>12.3e}",
                    row.iter, row.estimate, row.spread
                )?,
                None => writeln!(
                    f,
                    "{:>5}  {:>24}  {:>12.3e}",
                    row.iter, row.estimate, row.spread
                )?,
            }
        }
        Ok(())
    }
}
