//! Bisection on `tan(e^x) - x/(x - 2)` over `[-1.5, 0]`.
//!
//! Prints every halving, the root to the precision of the tolerance, and the
//! predicted iteration count.
//!
//! ```text
//! cargo run -p rootline-demos --example bisection
//! ```

use std::error::Error;

use rootline_core::Tolerance;
use rootline_demos::TAN_EXP;
use rootline_observers::Trace;
use rootline_solvers::{bisection, bounds};

fn main() -> Result<(), Box<dyn Error>> {
    let problem = TAN_EXP;
    let tol = Tolerance::new(problem.tol)?;
    let [a, b] = problem.bracket;

    let mut trace = Trace::with_precision(tol);
    let solution = bisection::solve(
        &problem.f,
        problem.bracket,
        &bisection::Config::new(tol),
        &mut trace,
    )?;
    let predicted = bounds::bisection_iterations(a, b, tol)?;

    println!("{}", problem.name);
    println!();
    print!("{trace}");
    println!();
    println!("Root found: {}", tol.format(solution.x));
    println!("Achieved on iteration: {}", solution.iters);
    println!("Theoretical number of iterations needed to find the root: {predicted}");

    Ok(())
}
