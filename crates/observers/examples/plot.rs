//! Interactive visualizations of the rootline solvers.
//!
//! Each mode solves a simple problem and opens a plot window showing the
//! estimate and the spread at every iteration.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- bisect
//! cargo run --example plot --features plot -- fixed-point
//! cargo run --example plot --features plot -- fixed-point 1e-10
//! ```
//!
//! # Modes
//!
//! - **bisect [tol]**: Find the Dottie number (the unique fixed point of
//!   cos x) as the root of cos x − x on \[0, 2\]. The bracket width halves
//!   every iteration, a straight line on the log axis.
//!
//! - **fixed-point [tol]**: Find the golden ratio by iterating
//!   x ← √(1 + x) from 1.5. The step length shrinks by a roughly constant
//!   factor, so the log spread also falls linearly but more slowly.

use std::error::Error;

use rootline_core::Tolerance;
use rootline_observers::{ConvergencePlot, ShowConfig};
use rootline_solvers::{bisection, fixed_point};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "bisect".into());
    let tol = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid tolerance, expected a number such as 1e-6");
            std::process::exit(1);
        })
        .unwrap_or(1e-6);
    let tol = Tolerance::new(tol)?;

    match mode.as_str() {
        "bisect" => bisect(tol),
        "fixed-point" => iterate(tol),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [bisect|fixed-point] [tol]");
            std::process::exit(1);
        }
    }
}

fn bisect(tol: Tolerance) -> Result<(), Box<dyn Error>> {
    let f = |x: f64| x.cos() - x;
    let mut plot = ConvergencePlot::new().with_tolerance(tol);

    let solution = bisection::solve(&f, [0.0, 2.0], &bisection::Config::new(tol), &mut plot)?;

    plot.show(ShowConfig::new().title(format!(
        "Bisection: cos(x) = x  →  {} after {} halvings",
        tol.format(solution.x),
        solution.iters
    )))?;

    Ok(())
}

fn iterate(tol: Tolerance) -> Result<(), Box<dyn Error>> {
    let f = |x: f64| (1.0 + x).sqrt();
    let mut plot = ConvergencePlot::new().with_tolerance(tol);

    let solution = fixed_point::solve(&f, 1.5, &fixed_point::Config::new(tol), &mut plot)?;

    plot.show(ShowConfig::new().title(format!(
        "Fixed point: x = √(1 + x)  →  {} after {} iterations",
        tol.format(solution.x),
        solution.iters
    )))?;

    Ok(())
}
