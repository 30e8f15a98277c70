use thiserror::Error;

/// Errors that can occur when validating an interval.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// Ordered finite bounds of a search interval.
///
/// Bracketing solvers start from these bounds; open solvers use them only to
/// reject iterates that leave the trusted domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the interval endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BoundsError` if endpoints are non-finite or zero width.
    pub(crate) fn new(interval: [f64; 2]) -> Result<Self, BoundsError> {
        let [left, right] = interval;

        if !left.is_finite() || !right.is_finite() {
            return Err(BoundsError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BoundsError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(crate) fn left(&self) -> f64 {
        self.left
    }

    pub(crate) fn right(&self) -> f64 {
        self.right
    }

    /// Returns true if `x` lies in the closed interval.
    pub(crate) fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    pub(crate) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// A search bracket with residuals known at both ends.
///
/// The residuals at `left` and `right` always have opposite signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    left: f64,
    right: f64,
    left_residual: f64,
    right_residual: f64,
}

impl Bracket {
    /// Creates a bracket from validated bounds and their residuals.
    ///
    /// Returns `None` if the residuals share a sign.
    pub(crate) fn new(bounds: Bounds, left_residual: f64, right_residual: f64) -> Option<Self> {
        if Sign::of(left_residual) == Sign::of(right_residual) {
            return None;
        }

        Some(Self {
            left: bounds.left,
            right: bounds.right,
            left_residual,
            right_residual,
        })
    }

    /// Returns the bracket bounds as an array.
    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns half the bracket width.
    pub(crate) fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left)
    }

    /// Returns the x-intercept of the line through both endpoints.
    ///
    /// Returns `None` if the endpoint residuals are equal. The intercept is
    /// measured from `left` so large endpoints do not overflow, but it can
    /// still be non-finite when the slope underflows.
    pub(crate) fn false_position(&self) -> Option<f64> {
        let slope = self.right_residual - self.left_residual;

        #[allow(clippy::float_cmp)]
        if slope == 0.0 {
            return None;
        }

        Some(self.left - self.left_residual * ((self.right - self.left) / slope))
    }

    /// Returns the endpoint with the smaller residual magnitude.
    pub(crate) fn best_endpoint(&self) -> (f64, f64) {
        if self.left_residual.abs() <= self.right_residual.abs() {
            (self.left, self.left_residual)
        } else {
            (self.right, self.right_residual)
        }
    }

    /// Shrinks the bracket to the half that still contains a sign change.
    ///
    /// If the left residual and the new residual have opposite signs the
    /// root lies in `[left, x]`; otherwise `x` replaces the left endpoint.
    pub(crate) fn shrink(&mut self, x: f64, residual: f64) {
        if Sign::of(self.left_residual) == Sign::of(residual) {
            self.left = x;
            self.left_residual = residual;
        } else {
            self.right = x;
            self.right_residual = residual;
        }
    }
}
