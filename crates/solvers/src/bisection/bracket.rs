use thiserror::Error;

use rootline_core::Tolerance;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s): [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    /// The left endpoint is not strictly below the right endpoint.
    #[error("left endpoint must be below right endpoint: [{left}, {right}]")]
    NotIncreasing { left: f64, right: f64 },
}

/// The interval `[left, right]` that bisection narrows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Creates a bracket from finite, strictly increasing endpoints.
    ///
    /// # Errors
    ///
    /// Returns a `BracketError` if an endpoint is non-finite or `left >= right`.
    pub fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite { left, right });
        }

        if left >= right {
            return Err(BracketError::NotIncreasing { left, right });
        }

        Ok(Self { left, right })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    ///
    /// Halves each endpoint before adding, so the result stays finite for any
    /// finite bracket, including ones near `f64::MAX`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * self.left + 0.5 * self.right
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if the bracket is no wider than the tolerance.
    #[must_use]
    pub fn is_converged(&self, tol: Tolerance) -> bool {
        self.width() <= tol.value()
    }

    /// Keeps the left half: `right ← x`.
    pub(super) fn keep_left(&mut self, x: f64) {
        self.right = x;
    }

    /// Keeps the right half: `left ← x`.
    pub(super) fn keep_right(&mut self, x: f64) {
        self.left = x;
    }
}

/// Returns true if the values have strictly opposite signs.
///
/// Equivalent to `lhs * rhs < 0.0` without the product, which underflows to
/// zero for tiny magnitudes.
pub(super) fn opposite_signs(lhs: f64, rhs: f64) -> bool {
    (lhs < 0.0 && rhs > 0.0) || (lhs > 0.0 && rhs < 0.0)
}
