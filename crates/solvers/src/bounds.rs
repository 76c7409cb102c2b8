//! A-priori iteration counts for bisection and fixed-point iteration.
//!
//! These are closed-form predictions computed from the problem setup alone;
//! nothing is evaluated. Negative predictions (a tolerance looser than the
//! starting uncertainty) saturate at zero.

use std::f64::consts::LN_2;

use thiserror::Error;

use rootline_core::Tolerance;

/// Errors that can occur when computing an iteration bound.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundError {
    #[error("interval width must be finite and positive, got {width}")]
    NonPositiveWidth { width: f64 },

    #[error("distance from the initial guess to the farther endpoint must be finite and positive, got {spread}")]
    NonPositiveSpread { spread: f64 },

    #[error("contraction constant must lie strictly between 0 and 1, got {k}")]
    ContractionOutOfRange { k: f64 },
}

/// Predicts the number of bisection iterations on `[a, b]` for `tol`.
///
/// Computes `⌊(ln(b - a) - ln(tol)) / ln 2⌋ + 1`. The result never decreases
/// as `tol` decreases.
///
/// # Errors
///
/// Returns `BoundError::NonPositiveWidth` unless `b - a` is finite and positive.
pub fn bisection_iterations(a: f64, b: f64, tol: Tolerance) -> Result<usize, BoundError> {
    let width = b - a;
    if !width.is_finite() || width <= 0.0 {
        return Err(BoundError::NonPositiveWidth { width });
    }

    let n = ((width.ln() - tol.value().ln()) / LN_2).floor() + 1.0;
    Ok(saturating_count(n))
}

/// Predicts the number of fixed-point iterations from `x0` on `[a, b]`.
///
/// With `M = max(b - x0, x0 - a)`, computes `⌊ln(M·tol) / ln(k)⌋`, where `k`
/// bounds `|f'|` on the interval.
///
/// This is the long-standing formula of this crate and is kept as is. It
/// multiplies `M` by `tol` where the contraction estimate `k^n·M ≤ tol`
/// divides, so it under-predicts whenever `M > 1`. Prefer
/// [`contraction_iterations`] for a guaranteed bound.
///
/// # Errors
///
/// Returns an error unless `0 < k < 1` and `M` is finite and positive.
pub fn fixed_point_iterations(
    x0: f64,
    interval: [f64; 2],
    k: f64,
    tol: Tolerance,
) -> Result<usize, BoundError> {
    let (spread, ln_k) = validate_contraction(x0, interval, k)?;

    // ln(M·tol), summed so the product cannot underflow.
    let n = ((spread.ln() + tol.value().ln()) / ln_k).floor();
    Ok(saturating_count(n))
}

/// Returns the smallest `n` with `k^n·M ≤ tol`, where `M = max(b - x0, x0 - a)`.
///
/// This is the standard a-priori bound for a contraction with constant `k`
/// whose iterates stay in `[a, b]`: `⌈ln(tol / M) / ln(k)⌉`.
///
/// # Errors
///
/// Returns an error unless `0 < k < 1` and `M` is finite and positive.
pub fn contraction_iterations(
    x0: f64,
    interval: [f64; 2],
    k: f64,
    tol: Tolerance,
) -> Result<usize, BoundError> {
    let (spread, ln_k) = validate_contraction(x0, interval, k)?;

    let n = ((tol.value().ln() - spread.ln()) / ln_k).ceil();
    Ok(saturating_count(n))
}

/// Checks `k` and the spread `M`, returning `(M, ln k)`.
fn validate_contraction(x0: f64, interval: [f64; 2], k: f64) -> Result<(f64, f64), BoundError> {
    if !(k > 0.0 && k < 1.0) {
        return Err(BoundError::ContractionOutOfRange { k });
    }

    let [a, b] = interval;
    let spread = (b - x0).max(x0 - a);
    if !spread.is_finite() || spread <= 0.0 {
        return Err(BoundError::NonPositiveSpread { spread });
    }

    Ok((spread, k.ln()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn saturating_count(n: f64) -> usize {
    if n > 0.0 { n as usize } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tol(value: f64) -> Tolerance {
        Tolerance::new(value).expect("valid tolerance")
    }

    #[test]
    fn bisection_classic_example() {
        assert_eq!(bisection_iterations(-1.5, 0.0, tol(1e-9)), Ok(31));
    }

    #[test]
    fn bisection_grows_as_tolerance_shrinks() {
        let mut previous = 0;
        for exp in 1..=15 {
            let n = bisection_iterations(0.0, 3.0, tol(10f64.powi(-exp))).unwrap();
            assert!(n >= previous, "tol = 1e-{exp}");
            previous = n;
        }
        assert!(previous > 40);
    }

    #[test]
    fn bisection_saturates_at_zero() {
        assert_eq!(bisection_iterations(0.0, 1.0, tol(4.0)), Ok(0));
    }

    #[test]
    fn bisection_rejects_empty_interval() {
        assert!(matches!(
            bisection_iterations(1.0, 1.0, tol(1e-3)),
            Err(BoundError::NonPositiveWidth { .. })
        ));
        assert!(matches!(
            bisection_iterations(2.0, 1.0, tol(1e-3)),
            Err(BoundError::NonPositiveWidth { .. })
        ));
        assert!(matches!(
            bisection_iterations(f64::NEG_INFINITY, 1.0, tol(1e-3)),
            Err(BoundError::NonPositiveWidth { .. })
        ));
    }

    #[test]
    fn fixed_point_classic_example() {
        let k = 2.0_f64.sqrt() / 4.0;

        assert_eq!(fixed_point_iterations(1.5, [1.0, 2.0], k, tol(1e-5)), Ok(11));
        assert_eq!(contraction_iterations(1.5, [1.0, 2.0], k, tol(1e-5)), Ok(11));
    }

    #[test]
    fn fixed_point_formula_under_predicts_for_wide_spread() {
        // M = 10: the kept formula uses ln(M·tol), the contraction bound ln(tol/M).
        assert_eq!(fixed_point_iterations(0.0, [-10.0, 5.0], 0.5, tol(1e-3)), Ok(6));
        assert_eq!(contraction_iterations(0.0, [-10.0, 5.0], 0.5, tol(1e-3)), Ok(14));
    }

    #[test]
    fn contraction_bound_is_tight() {
        let (k, spread, tolerance) = (0.5_f64, 1.0, 1e-3);
        let n = contraction_iterations(0.0, [-1.0, 1.0], k, tol(tolerance)).unwrap();

        let n = i32::try_from(n).unwrap();
        assert!(k.powi(n) * spread <= tolerance);
        assert!(k.powi(n - 1) * spread > tolerance);
    }

    #[test]
    fn contraction_saturates_at_zero() {
        assert_eq!(contraction_iterations(0.0, [-1.0, 1.0], 0.5, tol(2.0)), Ok(0));
    }

    #[test]
    fn extreme_scales_do_not_underflow() {
        // M·tol = 1e-400 and tol/M = 1e-400 are both below the f64 range.
        assert_eq!(
            fixed_point_iterations(0.0, [-1e-200, 1e-200], 0.5, tol(1e-200)),
            Ok(1328)
        );
        assert_eq!(
            contraction_iterations(0.0, [-1e200, 1e200], 0.5, tol(1e-200)),
            Ok(1329)
        );
    }

    #[test]
    fn rejects_contraction_constant_out_of_range() {
        for k in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            assert!(
                matches!(
                    fixed_point_iterations(1.5, [1.0, 2.0], k, tol(1e-5)),
                    Err(BoundError::ContractionOutOfRange { .. })
                ),
                "k = {k}"
            );
            assert!(matches!(
                contraction_iterations(1.5, [1.0, 2.0], k, tol(1e-5)),
                Err(BoundError::ContractionOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn rejects_degenerate_spread() {
        assert!(matches!(
            fixed_point_iterations(1.0, [1.0, 1.0], 0.5, tol(1e-5)),
            Err(BoundError::NonPositiveSpread { .. })
        ));
        assert!(matches!(
            contraction_iterations(f64::NAN, [1.0, 2.0], 0.5, tol(1e-5)),
            Err(BoundError::NonPositiveSpread { .. })
        ));
    }
}
