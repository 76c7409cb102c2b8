//! Fixed-point iteration of `sqrt(1 + x)` from 1.5.
//!
//! Prints every step, the fixed point to the precision of the tolerance, and
//! both a-priori iteration estimates.
//!
//! ```text
//! cargo run -p rootline-demos --example fixed_point
//! ```

use std::error::Error;

use rootline_core::Tolerance;
use rootline_demos::GOLDEN;
use rootline_observers::Trace;
use rootline_solvers::{bounds, fixed_point};

fn main() -> Result<(), Box<dyn Error>> {
    let problem = GOLDEN;
    let tol = Tolerance::new(problem.tol)?;

    let mut trace = Trace::with_precision(tol);
    let solution = fixed_point::solve(
        &problem.f,
        problem.x0,
        &fixed_point::Config::new(tol),
        &mut trace,
    )?;
    let predicted = bounds::fixed_point_iterations(problem.x0, problem.interval, problem.k, tol)?;
    let guaranteed = bounds::contraction_iterations(problem.x0, problem.interval, problem.k, tol)?;

    println!("{}", problem.name);
    println!();
    print!("{trace}");
    println!();
    println!("Fixed point found: {}", tol.format(solution.x));
    println!("Achieved on iteration: {}", solution.iters);
    println!("Theoretical number of iterations needed to find the fixed point: {predicted}");
    println!("Contraction bound (k^n·M <= tol): {guaranteed}");

    Ok(())
}
