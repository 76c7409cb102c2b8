use thiserror::Error;

/// Distance from an integer below which `-log10(tol)` counts as that integer.
const DIGITS_SNAP: f64 = 1e-9;

/// Errors that can occur when creating a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("tolerance must be finite, got {value}")]
    NonFinite { value: f64 },

    #[error("tolerance must be positive, got {value}")]
    NonPositive { value: f64 },
}

/// A validated convergence threshold.
///
/// The same value drives loop termination (bracket width or distance between
/// successive iterates) and the number of decimal places worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a tolerance from a finite, strictly positive value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is non-finite, zero, or negative.
    pub fn new(value: f64) -> Result<Self, ToleranceError> {
        if !value.is_finite() {
            return Err(ToleranceError::NonFinite { value });
        }
        if value <= 0.0 {
            return Err(ToleranceError::NonPositive { value });
        }
        Ok(Self(value))
    }

    /// Returns the tolerance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the number of decimal places resolved by this tolerance.
    ///
    /// This is `⌈-log10(tol)⌉`, clamped at zero. Values within rounding noise
    /// of a power of ten resolve to that power, so `1e-5` gives 5.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn digits(self) -> usize {
        let raw = -self.0.log10();
        let nearest = raw.round();
        let digits = if (raw - nearest).abs() < DIGITS_SNAP {
            nearest
        } else {
            raw.ceil()
        };
        digits.max(0.0) as usize
    }

    /// Formats `value` with [`digits`](Self::digits) decimal places.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.digits())
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
