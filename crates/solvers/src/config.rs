use thiserror::Error;

/// Default iteration cap shared by all solvers.
pub const DEFAULT_MAX_ITERS: usize = 1_000_000;

/// Default absolute tolerance for both step/width and residual tests.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Configuration shared by all root-finding solvers.
///
/// Convergence tests are strict: a solver has converged when the relevant
/// quantity is *below* its tolerance, so both tolerances must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Maximum number of iterations before returning [`Status::MaxIters`].
    ///
    /// [`Status::MaxIters`]: crate::Status::MaxIters
    pub max_iters: usize,
    /// Absolute tolerance on bracket half-width (bisection) or step size
    /// (Newton-Raphson, secant).
    pub x_tol: f64,
    /// Absolute tolerance on the residual magnitude `|f(x)|`.
    pub residual_tol: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and positive")]
    XTol,

    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            x_tol: DEFAULT_TOLERANCE,
            residual_tol: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Validates that both tolerances are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.x_tol.is_finite() || self.x_tol <= 0.0 {
            return Err(ConfigError::XTol);
        }
        if !self.residual_tol.is_finite() || self.residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        Ok(())
    }

    /// Returns a copy with a different iteration cap.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy using `tol` for both the x and residual tests.
    #[must_use]
    pub fn with_tolerance(self, tol: f64) -> Self {
        Self {
            x_tol: tol,
            residual_tol: tol,
            ..self
        }
    }

    pub(crate) fn is_residual_converged(&self, residual: f64) -> bool {
        residual.abs() < self.residual_tol
    }

    pub(crate) fn is_step_converged(&self, x: f64, x_next: f64) -> bool {
        (x_next - x).abs() < self.x_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_named_constants() {
        let config = Config::default();
        assert_eq!(config.max_iters, DEFAULT_MAX_ITERS);
        assert!(config.validate().is_ok());
        assert!(config.is_residual_converged(5e-7));
        assert!(!config.is_residual_converged(1e-6));
    }

    #[test]
    fn rejects_bad_tolerances() {
        let config = Config::default().with_tolerance(0.0);
        assert_eq!(config.validate(), Err(ConfigError::XTol));

        let config = Config {
            residual_tol: f64::NAN,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ResidualTol));

        let config = Config {
            x_tol: f64::INFINITY,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::XTol));
    }

    #[test]
    fn step_test_is_symmetric() {
        let config = Config::default();
        assert!(config.is_step_converged(1.0, 1.0 + 1e-7));
        assert!(config.is_step_converged(1.0 + 1e-7, 1.0));
        assert!(!config.is_step_converged(1.0, 1.1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let config = Config::default().with_max_iters(50).with_tolerance(1e-9);

        let json = serde_json::to_string(&config).expect("serializes");
        let back: Config = serde_json::from_str(&json).expect("deserializes");

        assert_eq!(back, config);
        assert!(back.validate().is_ok());
    }
}
