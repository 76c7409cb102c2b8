//! Worked problems used by the demo programs.
//!
//! ```text
//! cargo run -p rootline-demos --example bisection
//! cargo run -p rootline-demos --example fixed_point
//! ```

use std::f64::consts::SQRT_2;

/// A root-finding problem on a bracketing interval.
#[derive(Debug, Clone, Copy)]
pub struct BracketProblem {
    pub name: &'static str,
    pub f: fn(f64) -> f64,
    pub bracket: [f64; 2],
    pub tol: f64,
}

/// A fixed-point problem with a known contraction constant on `interval`.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointProblem {
    pub name: &'static str,
    pub f: fn(f64) -> f64,
    pub x0: f64,
    pub interval: [f64; 2],
    /// Upper bound on `|f'|` over `interval`.
    pub k: f64,
    pub tol: f64,
}

/// `tan(e^x) - x / (x - 2)` on `[-1.5, 0]`, with a single root near -1.0845.
pub const TAN_EXP: BracketProblem = BracketProblem {
    name: "tan(e^x) - x/(x - 2) on [-1.5, 0]",
    f: tan_exp,
    bracket: [-1.5, 0.0],
    tol: 1e-9,
};

/// `sqrt(1 + x)` from 1.5, converging to the golden ratio.
///
/// On `[1, 2]` the derivative `1 / (2·sqrt(1 + x))` is at most `sqrt(2)/4`.
pub const GOLDEN: FixedPointProblem = FixedPointProblem {
    name: "x = sqrt(1 + x) from x0 = 1.5",
    f: golden,
    x0: 1.5,
    interval: [1.0, 2.0],
    k: SQRT_2 / 4.0,
    tol: 1e-5,
};

fn tan_exp(x: f64) -> f64 {
    x.exp().tan() - x / (x - 2.0)
}

fn golden(x: f64) -> f64 {
    (1.0 + x).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tan_exp_changes_sign_on_its_bracket() {
        let [a, b] = TAN_EXP.bracket;
        let (fa, fb) = ((TAN_EXP.f)(a), (TAN_EXP.f)(b));
        assert!(fa * fb < 0.0, "f(a) = {fa}, f(b) = {fb}");
    }

    #[test]
    fn golden_contraction_constant_bounds_the_derivative() {
        let [a, _] = GOLDEN.interval;
        let slope_at_left = 0.5 / (1.0 + a).sqrt();
        assert_relative_eq!(slope_at_left, GOLDEN.k);
        assert!(GOLDEN.k < 1.0);
    }
}
